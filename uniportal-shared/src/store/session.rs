//! Session Store: authentication state and the tutorial flag.

use super::observers::{Observers, Subscription};
use super::path::PathStore;
use crate::errors::StorageError;
use crate::models::{ROOT_PATH, Session, UserRecord};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Host-provided durable key/value store. Only one boolean flag is ever kept.
pub trait SessionStorage {
    /// Reads the flag; a missing key reads as `false`.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when the store cannot be read.
    fn load_flag(&self, key: &str) -> Result<bool, StorageError>;

    /// Sets the flag to `true`.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when the store cannot be written.
    fn store_flag(&self, key: &str) -> Result<(), StorageError>;

    /// Removes the flag.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when the store cannot be written.
    fn clear_flag(&self, key: &str) -> Result<(), StorageError>;
}

/// Owner of the [`Session`].
///
/// Login and logout never fail: storage errors are logged and the in-memory
/// transition goes ahead. Both transitions finish by navigating to the root
/// path.
pub struct SessionStore {
    session: RefCell<Session>,
    storage: Rc<dyn SessionStorage>,
    key: String,
    path: Rc<PathStore>,
    observers: Observers<Session>,
}

impl SessionStore {
    /// Creates the store, authenticating immediately when the persisted flag
    /// is set.
    pub fn restore(storage: Rc<dyn SessionStorage>, key: &str, path: Rc<PathStore>) -> Self {
        let restored = match storage.load_flag(key) {
            Ok(flag) => flag,
            Err(err) => {
                tracing::warn!(error = %err, key, "could not read session flag");
                false
            }
        };
        if restored {
            tracing::info!("session restored from durable storage");
        }

        Self {
            session: RefCell::new(Session {
                user: restored.then(UserRecord::student),
                tutorial_seen: false,
            }),
            storage,
            key: key.to_string(),
            path,
            observers: Observers::new(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Session {
        self.session.borrow().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_authenticated()
    }

    pub fn login(&self) {
        let user = UserRecord::student();
        tracing::info!(user = %user.id, "login");
        self.session.borrow_mut().user = Some(user);
        if let Err(err) = self.storage.store_flag(&self.key) {
            tracing::warn!(error = %err, "could not persist session flag");
        }
        self.path.navigate(ROOT_PATH);
        self.notify();
    }

    pub fn logout(&self) {
        tracing::info!("logout");
        self.session.borrow_mut().user = None;
        if let Err(err) = self.storage.clear_flag(&self.key) {
            tracing::warn!(error = %err, "could not clear session flag");
        }
        self.path.navigate(ROOT_PATH);
        self.notify();
    }

    /// One-way. Only the first call notifies.
    pub fn mark_tutorial_seen(&self) {
        if self.session.borrow().tutorial_seen {
            return;
        }
        self.session.borrow_mut().tutorial_seen = true;
        tracing::debug!("tutorial marked as seen");
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Session) + 'static,
    {
        self.observers.subscribe(callback)
    }

    fn notify(&self) {
        self.observers.emit(|| self.current());
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session.borrow())
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
