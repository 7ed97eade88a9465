//! In-memory host adapters for native embeddings and tests.

use super::path::{HostListener, LocationHost};
use super::session::SessionStorage;
use crate::errors::StorageError;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

type Listeners = RefCell<Vec<(u64, Rc<dyn Fn(String)>)>>;

/// Location host backed by an in-memory history stack.
///
/// Every change fires the registered listeners synchronously, including
/// paths pushed by the app, so listeners see their own navigations echoed
/// back. [`MemoryLocation::set_external`] and [`MemoryLocation::back`]
/// simulate user-driven changes.
#[derive(Default)]
pub struct MemoryLocation {
    stack: RefCell<Vec<String>>,
    pushed: RefCell<Vec<String>>,
    listeners: Rc<Listeners>,
    next_id: Cell<u64>,
}

impl MemoryLocation {
    /// Creates a host whose location starts at the raw token `initial`.
    pub fn new(initial: &str) -> Rc<Self> {
        Rc::new(Self {
            stack: RefCell::new(vec![initial.to_string()]),
            ..Self::default()
        })
    }

    /// Every path pushed by the app, oldest first.
    #[must_use]
    pub fn pushed(&self) -> Vec<String> {
        self.pushed.borrow().clone()
    }

    /// Simulates the user editing the location.
    pub fn set_external(&self, raw: &str) {
        self.stack.borrow_mut().push(raw.to_string());
        self.fire(raw);
    }

    /// Simulates the browser back button. No-op at the first entry.
    pub fn back(&self) {
        let previous = {
            let mut stack = self.stack.borrow_mut();
            if stack.len() < 2 {
                return;
            }
            stack.pop();
            stack.last().cloned().unwrap_or_default()
        };
        self.fire(&previous);
    }

    fn fire(&self, raw: &str) {
        let listeners: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(raw.to_string());
        }
    }
}

struct MemoryListener {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Drop for MemoryListener {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl LocationHost for MemoryLocation {
    fn current(&self) -> String {
        self.stack.borrow().last().cloned().unwrap_or_default()
    }

    fn push(&self, path: &str) {
        let raw = format!("#{path}");
        self.stack.borrow_mut().push(raw.clone());
        self.pushed.borrow_mut().push(path.to_string());
        self.fire(&raw);
    }

    fn listen(&self, on_change: Box<dyn Fn(String)>) -> HostListener {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(on_change)));
        Box::new(MemoryListener {
            id,
            listeners: Rc::downgrade(&self.listeners),
        })
    }
}

impl std::fmt::Debug for MemoryLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryLocation")
            .field("stack", &self.stack.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Durable-store stand-in holding boolean flags in a map.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    flags: RefCell<HashMap<String, bool>>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Storage that already holds `key = true`, as after a previous login.
    pub fn with_flag(key: &str) -> Rc<Self> {
        let storage = Self::default();
        storage.flags.borrow_mut().insert(key.to_string(), true);
        Rc::new(storage)
    }

    /// Storage whose every operation fails.
    pub fn unavailable() -> Rc<Self> {
        Rc::new(Self {
            unavailable: true,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.flags.borrow().get(key).copied()
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable {
            Err(StorageError::Unavailable("memory storage disabled".to_string()))
        } else {
            Ok(())
        }
    }
}

impl SessionStorage for MemoryStorage {
    fn load_flag(&self, key: &str) -> Result<bool, StorageError> {
        self.check()?;
        Ok(self.flag(key).unwrap_or(false))
    }

    fn store_flag(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.flags.borrow_mut().insert(key.to_string(), true);
        Ok(())
    }

    fn clear_flag(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.flags.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_fires_listeners() {
        let host = MemoryLocation::new("");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let _guard = host.listen(Box::new(move |raw| log.borrow_mut().push(raw)));

        host.push("/inbox");
        assert_eq!(host.current(), "#/inbox");
        assert_eq!(*seen.borrow(), vec!["#/inbox".to_string()]);

        host.set_external("#/help");
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_dropped_listener_stops_firing() {
        let host = MemoryLocation::new("");
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let guard = host.listen(Box::new(move |_| counter.set(counter.get() + 1)));
        drop(guard);
        host.set_external("#/help");
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_back_at_first_entry_is_noop() {
        let host = MemoryLocation::new("#/start");
        host.back();
        assert_eq!(host.current(), "#/start");
    }

    #[test]
    fn test_storage_flag_lifecycle() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load_flag("k"), Ok(false));
        storage.store_flag("k").unwrap();
        assert_eq!(storage.load_flag("k"), Ok(true));
        storage.clear_flag("k").unwrap();
        assert_eq!(storage.flag("k"), None);
    }

    #[test]
    fn test_unavailable_storage_errors() {
        let storage = MemoryStorage::unavailable();
        assert!(matches!(
            storage.store_flag("k"),
            Err(StorageError::Unavailable(_))
        ));
    }
}
