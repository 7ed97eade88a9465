//! # State stores
//!
//! Process-wide state lives in three stores with a shared
//! publish/subscribe mechanism, composed by [`Portal`]. Host capabilities
//! (addressable location, durable storage) come in through the
//! [`LocationHost`] and [`SessionStorage`] traits.

pub mod memory;
pub mod observers;
pub mod path;
pub mod persona;
pub mod portal;
pub mod session;

pub use memory::{MemoryLocation, MemoryStorage};
pub use observers::{Observers, Subscription};
pub use path::{HostListener, LocationHost, PathStore, normalize_path};
pub use persona::PersonaStore;
pub use portal::{Portal, PortalSnapshot};
pub use session::{SessionStorage, SessionStore};
