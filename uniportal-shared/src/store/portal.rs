//! The composition root that ties the three stores together.
//!
//! A [`Portal`] owns the path, session and persona stores, re-derives the
//! top-level view on every change and publishes a [`PortalSnapshot`] to its
//! own subscribers. Renderers hold an `Rc<Portal>` and never touch the
//! stores directly.

use super::observers::{Observers, Subscription};
use super::path::{LocationHost, PathStore};
use super::persona::PersonaStore;
use super::session::{SessionStore, SessionStorage};
use crate::config::PortalConfig;
use crate::models::{
    NavItem, Persona, PersonaUpdate, ROOT_PATH, Session, View, filter_nav, portal_navigation,
    resolve_view,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalSnapshot {
    pub path: String,
    pub session: Session,
    pub persona: Persona,
    pub view: View,
}

impl PortalSnapshot {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

pub struct Portal {
    config: PortalConfig,
    path: Rc<PathStore>,
    session: SessionStore,
    persona: PersonaStore,
    navigation: Vec<NavItem>,
    observers: Observers<PortalSnapshot>,
    published: RefCell<Option<PortalSnapshot>>,
    _subscriptions: Vec<Subscription>,
}

impl Portal {
    /// Builds the stores on top of the given host adapters, restoring the
    /// session from `storage` and enforcing page guards for the initial path.
    pub fn new(
        config: PortalConfig,
        location: Rc<dyn LocationHost>,
        storage: Rc<dyn SessionStorage>,
    ) -> Rc<Self> {
        let portal = Rc::new_cyclic(|weak: &Weak<Self>| {
            let path = PathStore::attach(location);
            let session = SessionStore::restore(storage, &config.session_key, Rc::clone(&path));
            let persona = PersonaStore::default();

            let subscriptions = vec![
                path.subscribe(Self::relay(weak)),
                session.subscribe(Self::relay(weak)),
                persona.subscribe(Self::relay(weak)),
            ];

            Self {
                config,
                path,
                session,
                persona,
                navigation: portal_navigation(),
                observers: Observers::new(),
                published: RefCell::new(None),
                _subscriptions: subscriptions,
            }
        });
        portal.refresh();
        tracing::debug!(view = ?portal.current_view(), "portal ready");
        portal
    }

    fn relay<T>(weak: &Weak<Self>) -> impl Fn(&T) + 'static {
        let weak = weak.clone();
        move |_| {
            if let Some(portal) = weak.upgrade() {
                portal.refresh();
            }
        }
    }

    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    #[must_use]
    pub fn current_path(&self) -> String {
        self.path.current()
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.session.current()
    }

    #[must_use]
    pub fn persona(&self) -> Persona {
        self.persona.current()
    }

    #[must_use]
    pub fn current_view(&self) -> View {
        resolve_view(self.session.is_authenticated(), &self.path.current())
    }

    #[must_use]
    pub fn snapshot(&self) -> PortalSnapshot {
        PortalSnapshot {
            path: self.path.current(),
            session: self.session.current(),
            persona: self.persona.current(),
            view: self.current_view(),
        }
    }

    /// Sidebar filtered for the active persona.
    #[must_use]
    pub fn navigation(&self) -> Vec<NavItem> {
        filter_nav(&self.navigation, &self.persona.current())
    }

    pub fn navigate(&self, path: &str) {
        self.path.navigate(path);
    }

    pub fn login(&self) {
        self.session.login();
    }

    pub fn logout(&self) {
        self.session.logout();
    }

    pub fn update_persona(&self, update: PersonaUpdate) {
        self.persona.update(update);
    }

    pub fn mark_tutorial_seen(&self) {
        self.session.mark_tutorial_seen();
    }

    /// Registers a renderer. Only changed snapshots are delivered.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&PortalSnapshot) + 'static,
    {
        self.observers.subscribe(callback)
    }

    fn refresh(&self) {
        if self.enforce_page_guard() {
            // The redirect has already published the corrected snapshot.
            return;
        }

        let snapshot = self.snapshot();
        {
            let mut published = self.published.borrow_mut();
            if published.as_ref() == Some(&snapshot) {
                return;
            }
            *published = Some(snapshot.clone());
        }
        tracing::debug!(path = %snapshot.path, view = ?snapshot.view, "publishing snapshot");
        self.observers.emit(|| self.snapshot());
    }

    /// Sends an authenticated user on a page whose guard rejects the active
    /// persona back to the root path. Returns whether it redirected.
    fn enforce_page_guard(&self) -> bool {
        let Some(page) = self.current_view().page() else {
            return false;
        };
        let Some(guard) = page.guard() else {
            return false;
        };
        if guard.allows(&self.persona.current()) {
            return false;
        }
        tracing::info!(?page, "persona guard rejected page");
        self.path.navigate(ROOT_PATH);
        true
    }
}

impl fmt::Debug for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Portal")
            .field("path", &self.path)
            .field("session", &self.session)
            .field("persona", &self.persona)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Citizenship, Page};
    use crate::store::memory::{MemoryLocation, MemoryStorage};

    const KEY: &str = "portal_auth";

    struct Harness {
        portal: Rc<Portal>,
        host: Rc<MemoryLocation>,
        storage: Rc<MemoryStorage>,
        views: Rc<RefCell<Vec<View>>>,
        _sub: Subscription,
    }

    fn harness(initial: &str, storage: Rc<MemoryStorage>) -> Harness {
        let host = MemoryLocation::new(initial);
        let portal = Portal::new(PortalConfig::default(), host.clone(), storage.clone());
        let views = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&views);
        let sub = portal.subscribe(move |snapshot| log.borrow_mut().push(snapshot.view));
        Harness {
            portal,
            host,
            storage,
            views,
            _sub: sub,
        }
    }

    fn signed_in(initial: &str) -> Harness {
        harness(initial, MemoryStorage::with_flag(KEY))
    }

    fn international() -> PersonaUpdate {
        PersonaUpdate::default().citizenship(Citizenship::International)
    }

    #[test]
    fn test_anonymous_deep_link_shows_landing() {
        let h = harness("#/admin", MemoryStorage::new());
        assert_eq!(h.portal.current_view(), View::Landing);
        assert_eq!(h.portal.current_path(), "/admin");
    }

    #[test]
    fn test_cold_start_with_flag_is_authenticated() {
        let h = signed_in("#/inbox");
        assert!(h.portal.session().is_authenticated());
        assert_eq!(h.portal.current_view(), View::Page(Page::Inbox));
    }

    #[test]
    fn test_unknown_path_is_terminal_not_found() {
        let h = signed_in("/");
        h.portal.navigate("/zzz");

        assert_eq!(h.portal.current_view(), View::NotFound);
        assert_eq!(h.host.pushed(), vec!["/zzz".to_string()]);
        assert_eq!(*h.views.borrow(), vec![View::NotFound]);
    }

    #[test]
    fn test_domestic_visa_visit_returns_to_dashboard() {
        let h = signed_in("/");
        h.portal.navigate("/visa");

        assert_eq!(h.host.pushed(), vec!["/visa".to_string(), "/".to_string()]);
        assert_eq!(h.portal.current_path(), ROOT_PATH);
        assert_eq!(h.portal.current_view(), View::Page(Page::Dashboard));
        // Subscribers never see the rejected page, and the dashboard they
        // already had is not re-published.
        assert!(h.views.borrow().is_empty());
    }

    #[test]
    fn test_cold_start_on_visa_redirects() {
        let h = signed_in("#/visa");
        assert_eq!(h.portal.current_view(), View::Page(Page::Dashboard));
        assert_eq!(h.host.pushed(), vec!["/".to_string()]);
    }

    #[test]
    fn test_anonymous_visa_is_not_redirected() {
        let h = harness("#/visa", MemoryStorage::new());
        assert_eq!(h.portal.current_view(), View::Landing);
        assert!(h.host.pushed().is_empty());
    }

    #[test]
    fn test_international_student_stays_on_visa() {
        let h = signed_in("/");
        h.portal.update_persona(international());
        h.portal.navigate("/visa");

        assert_eq!(h.portal.current_view(), View::Page(Page::Visa));
        assert_eq!(h.views.borrow().last(), Some(&View::Page(Page::Visa)));
    }

    #[test]
    fn test_switching_to_domestic_on_visa_redirects() {
        let h = signed_in("/");
        h.portal.update_persona(international());
        h.portal.navigate("/visa");
        h.portal
            .update_persona(PersonaUpdate::default().citizenship(Citizenship::Domestic));

        assert_eq!(h.portal.current_view(), View::Page(Page::Dashboard));
        assert_eq!(h.views.borrow().last(), Some(&View::Page(Page::Dashboard)));
    }

    #[test]
    fn test_external_change_to_visa_is_guarded() {
        let h = signed_in("/");
        h.host.set_external("#/visa");
        assert_eq!(h.portal.current_view(), View::Page(Page::Dashboard));
    }

    #[test]
    fn test_login_publishes_dashboard_once() {
        let h = harness("/login", MemoryStorage::new());
        assert_eq!(h.portal.current_view(), View::Login);

        h.portal.login();

        assert_eq!(*h.views.borrow(), vec![View::Page(Page::Dashboard)]);
        assert_eq!(h.storage.flag(KEY), Some(true));
    }

    #[test]
    fn test_logout_returns_to_landing() {
        let h = signed_in("#/admin");
        h.portal.logout();

        let snapshot = h.portal.snapshot();
        assert!(!snapshot.is_authenticated());
        assert!(snapshot.session.user.is_none());
        assert_eq!(snapshot.path, ROOT_PATH);
        assert_eq!(snapshot.view, View::Landing);
        assert_eq!(h.storage.flag(KEY), None);
    }

    #[test]
    fn test_login_then_logout_round() {
        let h = harness("/", MemoryStorage::new());
        h.portal.navigate("/login");
        h.portal.login();
        h.portal.navigate("/progress");
        h.portal.logout();

        assert_eq!(
            *h.views.borrow(),
            vec![
                View::Login,
                View::Page(Page::Dashboard),
                View::Page(Page::Progress),
                View::Landing,
            ]
        );
    }

    #[test]
    fn test_navigation_follows_persona() {
        let h = signed_in("/");
        let has_visa = |items: &[NavItem]| {
            items
                .iter()
                .flat_map(|item| item.children().iter().chain(std::iter::once(item)))
                .any(|item| item.id == "visa")
        };
        assert!(!has_visa(&h.portal.navigation()));
        h.portal.update_persona(international());
        assert!(has_visa(&h.portal.navigation()));
    }

    #[test]
    fn test_tutorial_flag_publishes_once() {
        let h = signed_in("/");
        h.portal.mark_tutorial_seen();
        h.portal.mark_tutorial_seen();
        assert!(h.portal.session().tutorial_seen);
        assert_eq!(h.views.borrow().len(), 1);
    }

    #[test]
    fn test_dropped_portal_releases_host_listener() {
        let h = signed_in("/");
        let Harness { portal, host, .. } = h;
        drop(portal);
        host.set_external("#/inbox");
    }
}
