//! Theme handling.
//!
//! The selected theme is persisted under a fixed key in a [`PreferenceStore`]
//! and applied as a `data-theme` attribute on the document element.

mod theme_select;

pub use theme_select::ThemeSelect;

use std::collections::HashMap;
use std::sync::Mutex;
use web_sys::window;

/// Storage key of the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of the `data-theme` attribute and of the stored preference.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "浅色主题",
            Theme::Dark => "深色主题",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" | "浅色主题" => Some(Theme::Light),
            "dark" | "深色主题" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }
}

/// Key-value persistence for user preferences.
pub trait PreferenceStore: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Browser `localStorage`. Silently does nothing when storage is unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferenceStore;

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to persist preference '{}'", key);
            }
        }
    }
}

/// In-memory store for headless runs.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<HashMap<String, String>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}

/// Stored theme, or the default when nothing (valid) is stored.
pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    store
        .load(THEME_STORAGE_KEY)
        .and_then(|s| Theme::parse(&s))
        .unwrap_or_default()
}

pub fn save_theme(store: &dyn PreferenceStore, theme: Theme) {
    store.save(THEME_STORAGE_KEY, theme.as_str());
}

/// Sets `data-theme` on the root element so the stylesheet can switch palettes.
pub fn apply_theme_attribute(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.as_str());
}
