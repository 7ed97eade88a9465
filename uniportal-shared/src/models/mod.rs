pub mod nav;
pub mod persona;
pub mod route;
pub mod user;

pub use nav::{NavIcon, NavItem, NavTarget, Visibility, filter_nav, portal_navigation};
pub use persona::{Citizenship, Cohort, Faculty, Persona, PersonaUpdate, Status};
pub use route::{LOGIN_PATH, Page, ROOT_PATH, View, resolve_view};
pub use user::{Session, UserRecord};
