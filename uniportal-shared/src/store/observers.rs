//! Synchronous publish/subscribe primitive shared by the stores.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

/// Ordered list of subscribers to a value of type `T`.
///
/// Emission is synchronous. Callbacks may mutate the owning store while they
/// run; the list is snapshotted up front and the value is re-read for every
/// callback, so later subscribers always see the latest state.
pub struct Observers<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: 'static> Observers<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Registers `callback` until the returned guard is dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.entries.push((id, Rc::new(callback)));
            id
        };

        let registry: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.borrow_mut().entries.retain(|(entry, _)| *entry != id);
                }
            })),
        }
    }

    /// Calls every subscriber with the value produced by `read`.
    pub fn emit<R>(&self, read: R)
    where
        R: Fn() -> T,
    {
        let snapshot: Vec<(u64, Callback<T>)> = self.registry.borrow().entries.clone();
        for (id, callback) in snapshot {
            // Skip callbacks unsubscribed by an earlier callback of this round.
            let live = self
                .registry
                .borrow()
                .entries
                .iter()
                .any(|(entry, _)| *entry == id);
            if live {
                callback(&read());
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: 'static> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.registry.borrow().entries.len())
            .finish()
    }
}

/// Keeps a callback registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unsubscribes now. Equivalent to dropping the guard.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
