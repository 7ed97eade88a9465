use shared::models::{Persona, Session, View};
use shared::store::PortalSnapshot;
use yewdux::Store;

/// Render-side mirror of the latest [`PortalSnapshot`].
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub path: String,
    pub session: Session,
    pub persona: Persona,
    pub view: View,
}

impl From<PortalSnapshot> for AppState {
    fn from(snapshot: PortalSnapshot) -> Self {
        let PortalSnapshot {
            path,
            session,
            persona,
            view,
        } = snapshot;
        Self {
            path,
            session,
            persona,
            view,
        }
    }
}
