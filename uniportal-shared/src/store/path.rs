//! Path Store: the current logical path, kept in sync with the host's
//! addressable location.

use super::observers::{Observers, Subscription};
use crate::models::ROOT_PATH;
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Keeps a host listener registered for as long as it is held.
pub type HostListener = Box<dyn Any>;

/// Addressable location of the host environment (the URL fragment in a
/// browser, an in-memory history in tests).
pub trait LocationHost {
    /// Raw location token. May carry a leading `#` or be empty.
    fn current(&self) -> String;

    /// Records `path` as the new location.
    fn push(&self, path: &str);

    /// Registers a callback for location changes the app did not initiate
    /// (back/forward, manual edits).
    fn listen(&self, on_change: Box<dyn Fn(String)>) -> HostListener;
}

/// Strips a leading `#`; an empty token becomes the root path.
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let path = raw.strip_prefix('#').unwrap_or(raw);
    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        path.to_string()
    }
}

/// Owner of the current path.
pub struct PathStore {
    path: RefCell<String>,
    host: Rc<dyn LocationHost>,
    observers: Observers<String>,
    listener: RefCell<Option<HostListener>>,
}

impl PathStore {
    /// Reads the initial path from `host` and follows its external changes.
    pub fn attach(host: Rc<dyn LocationHost>) -> Rc<Self> {
        let initial = normalize_path(&host.current());
        tracing::debug!(path = %initial, "path store attached");

        let store = Rc::new(Self {
            path: RefCell::new(initial),
            host: Rc::clone(&host),
            observers: Observers::new(),
            listener: RefCell::new(None),
        });

        let weak = Rc::downgrade(&store);
        let listener = host.listen(Box::new(move |raw| {
            if let Some(store) = weak.upgrade() {
                store.sync_from_host(&raw);
            }
        }));
        *store.listener.borrow_mut() = Some(listener);
        store
    }

    #[must_use]
    pub fn current(&self) -> String {
        self.path.borrow().clone()
    }

    /// Sets the path, writes it to the host and notifies every subscriber
    /// before returning. Navigating to the current path adds no host entry
    /// but still notifies.
    pub fn navigate(&self, path: &str) {
        let unchanged = *self.path.borrow() == path;
        tracing::debug!(from = %self.path.borrow(), to = %path, unchanged, "navigate");
        if !unchanged {
            *self.path.borrow_mut() = path.to_string();
            self.host.push(path);
        }
        self.observers.emit(|| self.current());
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&String) + 'static,
    {
        self.observers.subscribe(callback)
    }

    fn sync_from_host(&self, raw: &str) {
        let path = normalize_path(raw);
        if *self.path.borrow() == path {
            return;
        }
        tracing::debug!(to = %path, "external location change");
        *self.path.borrow_mut() = path;
        self.observers.emit(|| self.current());
    }
}

impl fmt::Debug for PathStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathStore")
            .field("path", &self.path.borrow())
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryLocation;
    use test_case::test_case;

    fn recorder(store: &PathStore) -> (Rc<RefCell<Vec<String>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let subscription = store.subscribe(move |path| log.borrow_mut().push(path.clone()));
        (seen, subscription)
    }

    #[test_case("", "/" ; "empty")]
    #[test_case("#", "/" ; "bare hash")]
    #[test_case("#/inbox", "/inbox" ; "hash path")]
    #[test_case("/inbox", "/inbox" ; "plain path")]
    #[test_case("##x", "#x" ; "only one hash stripped")]
    fn test_normalize_path(raw: &str, expected: &str) {
        assert_eq!(normalize_path(raw), expected);
    }

    #[test]
    fn test_initial_path_comes_from_host() {
        let host = MemoryLocation::new("#/calendar");
        let store = PathStore::attach(host);
        assert_eq!(store.current(), "/calendar");
    }

    #[test]
    fn test_navigate_notifies_synchronously_and_pushes() {
        let host = MemoryLocation::new("");
        let store = PathStore::attach(host.clone());
        let (seen, _sub) = recorder(&store);

        store.navigate("/inbox");

        assert_eq!(store.current(), "/inbox");
        assert_eq!(*seen.borrow(), vec!["/inbox".to_string()]);
        assert_eq!(host.pushed(), vec!["/inbox".to_string()]);
    }

    #[test]
    fn test_navigate_to_same_path_still_notifies() {
        let host = MemoryLocation::new("/");
        let store = PathStore::attach(host.clone());
        let (seen, _sub) = recorder(&store);
        store.navigate("/");
        assert_eq!(seen.borrow().len(), 1);
        assert!(host.pushed().is_empty());
    }

    #[test]
    fn test_repeated_navigate_adds_one_host_entry() {
        let host = MemoryLocation::new("/");
        let store = PathStore::attach(host.clone());
        store.navigate("/inbox");
        store.navigate("/inbox");
        assert_eq!(host.pushed(), vec!["/inbox".to_string()]);
    }

    #[test]
    fn test_push_echo_from_host_does_not_renotify() {
        let host = MemoryLocation::new("/");
        let store = PathStore::attach(host.clone());
        let (seen, _sub) = recorder(&store);

        store.navigate("/help");

        assert_eq!(host.current(), "#/help");
        assert_eq!(*seen.borrow(), vec!["/help".to_string()]);
    }

    #[test]
    fn test_unrecognised_token_is_kept_verbatim() {
        let host = MemoryLocation::new("#zzz");
        let store = PathStore::attach(host.clone());
        assert_eq!(store.current(), "zzz");
        host.set_external("#/inbox?x");
        assert_eq!(store.current(), "/inbox?x");
    }

    #[test]
    fn test_external_change_notifies_once() {
        let host = MemoryLocation::new("/");
        let store = PathStore::attach(host.clone());
        let (seen, _sub) = recorder(&store);

        host.set_external("#/map");
        host.set_external("#/map");

        assert_eq!(store.current(), "/map");
        assert_eq!(*seen.borrow(), vec!["/map".to_string()]);
    }

    #[test]
    fn test_back_restores_previous_path() {
        let host = MemoryLocation::new("/");
        let store = PathStore::attach(host.clone());
        store.navigate("/inbox");
        store.navigate("/help");

        host.back();

        assert_eq!(store.current(), "/inbox");
    }
}
