//! Narrow key-value port over durable storage.
//!
//! Content modules never touch `localStorage` directly: they go through
//! [`KeyValueStore`], so host tests can run against [`MemStore`] and inject
//! failures without a browser.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ScreenError;

// Namespaced keys. One key per concern; sheet instances append their id.
pub const KEY_NOTES: &str = "gmscreen.notes";
pub const KEY_SHEET_PREFIX: &str = "gmscreen.sheet.";
pub const KEY_SAVED_NPCS: &str = "gmscreen.saved.npcs";
pub const KEY_SAVED_LOOT: &str = "gmscreen.saved.loot";
pub const KEY_SAVED_LOCATIONS: &str = "gmscreen.saved.locations";
pub const KEY_SAVED_ARCHITECTURES: &str = "gmscreen.saved.architectures";
pub const KEY_VISITED: &str = "gmscreen.visited";
pub const KEY_THEME: &str = "theme-preference";

pub fn sheet_key(sheet_id: &str) -> String {
    format!("{KEY_SHEET_PREFIX}{sheet_id}")
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, ScreenError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ScreenError>;
    fn remove(&self, key: &str) -> Result<(), ScreenError>;
}

/// Browser `localStorage` backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(key: &str) -> Result<web_sys::Storage, ScreenError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| ScreenError::StorageLoad {
                key: key.to_string(),
                reason: "localStorage unavailable".to_string(),
            })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ScreenError> {
        Self::storage(key)?
            .get_item(key)
            .map_err(|e| ScreenError::StorageLoad {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ScreenError> {
        // Quota-exceeded surfaces here as a JsValue error.
        Self::storage(key)?
            .set_item(key, value)
            .map_err(|e| ScreenError::StorageSave {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn remove(&self, key: &str) -> Result<(), ScreenError> {
        Self::storage(key)?
            .remove_item(key)
            .map_err(|e| ScreenError::StorageSave {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}

/// In-memory backend for tests. `fail_writes` simulates a full quota.
#[derive(Debug, Default)]
pub struct MemStore {
    entries: RefCell<HashMap<String, String>>,
    pub fail_writes: bool,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<String>, ScreenError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ScreenError> {
        if self.fail_writes {
            return Err(ScreenError::StorageSave {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ScreenError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Read and decode one JSON value. `Ok(None)` means the key was never set.
pub fn load_json<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Option<T>, ScreenError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| ScreenError::StorageLoad {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

pub fn save_json<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), ScreenError> {
    let raw = serde_json::to_string(value).map_err(|e| ScreenError::StorageSave {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set(key, &raw)
}

/// Append one item to a JSON-array collection key.
pub fn push_saved<T: Serialize + DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
    item: T,
) -> Result<usize, ScreenError> {
    let mut items: Vec<T> = load_json(store, key)?.unwrap_or_default();
    items.push(item);
    save_json(store, key, &items)?;
    Ok(items.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use screen_types::NpcProfile;

    #[test]
    fn load_missing_key_is_none() {
        let store = MemStore::new();
        let loaded: Option<Vec<NpcProfile>> = load_json(&store, KEY_SAVED_NPCS).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let store = MemStore::new();
        save_json(&store, KEY_VISITED, &true).unwrap();
        let visited: Option<bool> = load_json(&store, KEY_VISITED).unwrap();
        assert_eq!(visited, Some(true));
    }

    #[test]
    fn corrupt_json_surfaces_a_load_error() {
        let store = MemStore::new();
        store.set(KEY_NOTES, "{not json").unwrap();
        let result: Result<Option<Vec<String>>, _> = load_json(&store, KEY_NOTES);
        assert!(matches!(result, Err(ScreenError::StorageLoad { .. })));
    }

    #[test]
    fn write_failure_leaves_collection_readable() {
        let mut store = MemStore::new();
        let npc = NpcProfile {
            name: "Kestrel".into(),
            role: "Fixer".into(),
            demeanor: "Guarded".into(),
            quirk: "Counts exits".into(),
            cyberware: "Chipware socket".into(),
        };
        push_saved(&store, KEY_SAVED_NPCS, npc.clone()).unwrap();

        store.fail_writes = true;
        let result = push_saved(&store, KEY_SAVED_NPCS, npc);
        assert!(matches!(result, Err(ScreenError::StorageSave { .. })));

        // The earlier write is still intact.
        store.fail_writes = false;
        let items: Vec<NpcProfile> = load_json(&store, KEY_SAVED_NPCS).unwrap().unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn sheet_keys_are_namespaced_per_instance() {
        assert_eq!(sheet_key("abc"), "gmscreen.sheet.abc");
    }
}
