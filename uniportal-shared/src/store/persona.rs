//! Persona Store.

use super::observers::{Observers, Subscription};
use crate::models::{Persona, PersonaUpdate};
use std::cell::Cell;
use std::fmt;

/// Owner of the active [`Persona`]. Every facet is freely mutable.
pub struct PersonaStore {
    persona: Cell<Persona>,
    observers: Observers<Persona>,
}

impl PersonaStore {
    #[must_use]
    pub fn new(initial: Persona) -> Self {
        Self {
            persona: Cell::new(initial),
            observers: Observers::new(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Persona {
        self.persona.get()
    }

    /// Merges the facets present in `update`. Subscribers are notified only
    /// when the persona actually changed.
    pub fn update(&self, update: PersonaUpdate) {
        let mut persona = self.persona.get();
        if !persona.apply(update) {
            return;
        }
        tracing::debug!(?persona, "persona updated");
        self.persona.set(persona);
        self.observers.emit(|| self.current());
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Persona) + 'static,
    {
        self.observers.subscribe(callback)
    }
}

impl Default for PersonaStore {
    fn default() -> Self {
        Self::new(Persona::default())
    }
}

impl fmt::Debug for PersonaStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonaStore")
            .field("persona", &self.persona.get())
            .field("observers", &self.observers)
            .finish()
    }
}
