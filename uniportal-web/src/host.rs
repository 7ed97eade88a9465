//! Browser implementations of the portal host traits.

use gloo_events::EventListener;
use gloo_storage::errors::StorageError as GlooStorageError;
use gloo_storage::{LocalStorage, Storage};
use shared::errors::StorageError;
use shared::store::{HostListener, LocationHost, SessionStorage};

/// URL fragment location, e.g. `index.html#/inbox`.
///
/// The fragment is read and written verbatim: `#zzz` or `#/inbox?x` reach
/// the path store as typed.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashLocation;

impl HashLocation {
    pub fn new() -> Self {
        Self
    }
}

fn location() -> Option<web_sys::Location> {
    web_sys::window().map(|window| window.location())
}

/// Current fragment without its leading `#`; empty when there is none.
fn read_fragment() -> String {
    let hash = location()
        .and_then(|location| location.hash().ok())
        .unwrap_or_default();
    hash.strip_prefix('#').unwrap_or(&hash).to_string()
}

impl LocationHost for HashLocation {
    fn current(&self) -> String {
        read_fragment()
    }

    fn push(&self, path: &str) {
        let Some(location) = location() else {
            log::warn!("No window; cannot move to {path}");
            return;
        };
        if let Err(err) = location.set_hash(path) {
            log::warn!("Could not set location fragment {path}: {err:?}");
        }
    }

    fn listen(&self, on_change: Box<dyn Fn(String)>) -> HostListener {
        let Some(window) = web_sys::window() else {
            log::warn!("No window; location changes will not be followed");
            return Box::new(());
        };
        Box::new(EventListener::new(&window, "hashchange", move |_| {
            on_change(read_fragment());
        }))
    }
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn convert(key: &str, err: GlooStorageError) -> StorageError {
    match err {
        GlooStorageError::SerdeError(err) => StorageError::Serialization {
            key: key.to_string(),
            reason: err.to_string(),
        },
        GlooStorageError::JsError(err) => StorageError::Unavailable(err.to_string()),
        GlooStorageError::KeyNotFound(key) => StorageError::Other(format!("missing key {key}")),
    }
}

impl SessionStorage for BrowserStorage {
    fn load_flag(&self, key: &str) -> Result<bool, StorageError> {
        match LocalStorage::get::<bool>(key) {
            Ok(flag) => Ok(flag),
            Err(GlooStorageError::KeyNotFound(_)) => Ok(false),
            Err(err) => Err(convert(key, err)),
        }
    }

    fn store_flag(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::set(key, true).map_err(|err| convert(key, err))
    }

    fn clear_flag(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::delete(key);
        Ok(())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::store::PathStore;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const KEY: &str = "uniportal_host_test";

    #[wasm_bindgen_test]
    fn test_storage_flag_round() {
        let storage = BrowserStorage;
        storage.clear_flag(KEY).unwrap();
        assert_eq!(storage.load_flag(KEY), Ok(false));
        storage.store_flag(KEY).unwrap();
        assert_eq!(storage.load_flag(KEY), Ok(true));
        storage.clear_flag(KEY).unwrap();
        assert_eq!(storage.load_flag(KEY), Ok(false));
    }

    fn set_fragment(raw: &str) {
        web_sys::window()
            .unwrap()
            .location()
            .set_hash(raw)
            .unwrap();
    }

    #[wasm_bindgen_test]
    fn test_push_updates_location() {
        let location = HashLocation::new();
        location.push("/inbox");
        assert_eq!(location.current(), "/inbox");
    }

    #[wasm_bindgen_test]
    fn test_relative_fragment_is_read_verbatim() {
        set_fragment("zzz");
        assert_eq!(HashLocation::new().current(), "zzz");

        let store = PathStore::attach(Rc::new(HashLocation::new()));
        assert_eq!(store.current(), "zzz");
    }

    #[wasm_bindgen_test]
    fn test_query_is_kept_in_fragment() {
        set_fragment("/inbox?x");
        assert_eq!(HashLocation::new().current(), "/inbox?x");
    }

    #[wasm_bindgen_test]
    fn test_listener_survives_relative_fragment() {
        let location = HashLocation::new();
        let _guard = location.listen(Box::new(|raw| log::debug!("fragment now {raw}")));
        location.push("zzz");
        assert_eq!(location.current(), "zzz");
    }
}
