mod admin;
mod calendar;
mod dashboard;
mod documents;
mod help;
mod housing;
mod inbox;
mod it;
mod landing;
mod life;
mod login;
mod map;
mod not_found;
mod profile;
mod progress;
mod tasks;
mod timetable;
mod visa;

pub use admin::AdminPage;
pub use calendar::CalendarPage;
pub use dashboard::DashboardPage;
pub use documents::DocumentsPage;
pub use help::HelpPage;
pub use housing::HousingPage;
pub use inbox::InboxPage;
pub use it::ItPage;
pub use landing::LandingPage;
pub use life::LifePage;
pub use login::LoginPage;
pub use map::MapPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use progress::ProgressPage;
pub use tasks::TasksPage;
pub use timetable::TimetablePage;
pub use visa::VisaPage;
