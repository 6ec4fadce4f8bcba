//! Runtime settings of the console.
//!
//! Every value has a built-in default. The host page may override a subset via
//! `<meta name="console:<key>" content="...">` tags, so one build can sit behind
//! different reverse-proxy prefixes without recompiling.

use crate::layout::view_manager::ChatBounds;

/// Prefix of the `<meta name=...>` keys read by [`AppSettings::from_document`].
pub const META_PREFIX: &str = "console:";

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_HEALTH_PATH: &str = "/health";

#[derive(Clone, Debug, PartialEq)]
pub struct AppSettings {
    /// Prefix of every backend endpoint, without a trailing slash.
    pub api_base: String,
    /// Health check path. Served outside `api_base`.
    pub health_path: String,
    pub log_level: log::Level,
    /// Viewport width at or below which the sidebar collapses.
    pub sidebar_breakpoint_px: f64,
    /// Delay before the form is reloaded after a configuration reset.
    pub reset_reload_delay_ms: u32,
    /// Delay of the debounced chat height recompute after a window resize.
    pub chat_resize_delay_ms: u32,
    pub chat_bounds: ChatBounds,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            health_path: DEFAULT_HEALTH_PATH.to_string(),
            log_level: log::Level::Debug,
            sidebar_breakpoint_px: 768.0,
            reset_reload_delay_ms: 1000,
            chat_resize_delay_ms: 200,
            chat_bounds: ChatBounds::default(),
        }
    }
}

impl AppSettings {
    /// Builds settings from a key lookup, falling back to defaults for missing
    /// or malformed values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(base) = lookup("api-base").and_then(|v| normalize_base(&v)) {
            settings.api_base = base;
        }
        if let Some(path) = lookup("health-path") {
            let path = path.trim();
            if !path.is_empty() {
                settings.health_path = if path.starts_with('/') || path.contains("://") {
                    path.to_string()
                } else {
                    format!("/{}", path)
                };
            }
        }
        if let Some(level) = lookup("log-level").and_then(|v| v.trim().parse().ok()) {
            settings.log_level = level;
        }

        settings
    }

    /// Reads the overrides from the current document's `<meta>` tags.
    pub fn from_document() -> Self {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Self::default();
        };
        Self::from_lookup(|key| {
            let selector = format!("meta[name='{}{}']", META_PREFIX, key);
            document
                .query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"))
        })
    }
}

fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
