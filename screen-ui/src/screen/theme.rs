use crate::storage::{KeyValueStore, KEY_THEME};

pub const DEFAULT_THEME: &str = "dark";

pub fn next_theme(current_theme: &str) -> String {
    if current_theme == "light" {
        "dark".to_string()
    } else {
        "light".to_string()
    }
}

pub fn apply_theme_to_document(theme: &str) {
    if !matches!(theme, "light" | "dark") {
        return;
    }

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme);
        }
    }
}

pub fn cached_theme_preference(store: &dyn KeyValueStore) -> Option<String> {
    store
        .get(KEY_THEME)
        .ok()
        .flatten()
        .filter(|theme| matches!(theme.as_str(), "light" | "dark"))
}

pub fn cache_theme_preference(store: &dyn KeyValueStore, theme: &str) {
    if !matches!(theme, "light" | "dark") {
        return;
    }
    let _ = store.set(KEY_THEME, theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStore;

    #[test]
    fn theme_toggle_alternates() {
        assert_eq!(next_theme("dark"), "light");
        assert_eq!(next_theme("light"), "dark");
        assert_eq!(next_theme("garbage"), "light");
    }

    #[test]
    fn preference_round_trips_and_rejects_junk() {
        let store = MemStore::new();
        cache_theme_preference(&store, "light");
        assert_eq!(cached_theme_preference(&store).as_deref(), Some("light"));

        cache_theme_preference(&store, "neon");
        assert_eq!(cached_theme_preference(&store).as_deref(), Some("light"));
    }
}
