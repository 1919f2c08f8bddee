//! Browser `localStorage` behind the session's `KeyValueStore` seam.

use shared_types::{AppError, KeyValueStore};
use shared_ui::theme::ThemeMode;

/// Store used by the running app: `localStorage` on web, memory elsewhere.
#[cfg(feature = "web")]
pub type AppStore = LocalStorage;
#[cfg(not(feature = "web"))]
pub type AppStore = shared_types::MemoryStore;

/// Stateless handle to `window.localStorage`.
#[cfg(feature = "web")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(feature = "web")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(feature = "web")]
impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .ok_or_else(|| AppError::internal(format!("could not write {key} to localStorage")))
    }

    fn remove_item(&mut self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Read the saved theme, falling back to `default` for missing or unknown values.
pub fn load_theme(store: &impl KeyValueStore, key: &str, default: ThemeMode) -> ThemeMode {
    store
        .get_item(key)
        .and_then(|raw| ThemeMode::parse(&raw))
        .unwrap_or(default)
}

pub fn save_theme(store: &mut impl KeyValueStore, key: &str, mode: ThemeMode) {
    if let Err(err) = store.set_item(key, mode.as_str()) {
        tracing::warn!(error = %err, "failed to persist theme");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::MemoryStore;

    #[test]
    fn theme_falls_back_when_missing_or_garbled() {
        let mut store = MemoryStore::new();
        assert_eq!(load_theme(&store, "t", ThemeMode::Dark), ThemeMode::Dark);
        store.set_item("t", "sepia").unwrap();
        assert_eq!(load_theme(&store, "t", ThemeMode::Light), ThemeMode::Light);
    }

    #[test]
    fn theme_roundtrips_through_store() {
        let mut store = MemoryStore::new();
        save_theme(&mut store, "t", ThemeMode::Light);
        assert_eq!(store.get_item("t").as_deref(), Some("light"));
        assert_eq!(load_theme(&store, "t", ThemeMode::Dark), ThemeMode::Light);
    }
}
