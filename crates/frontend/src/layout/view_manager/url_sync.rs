//! Mirrors the active tab into the `?tab=` query parameter.

use super::{TabId, ViewManager};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
struct TabQuery {
    #[serde(default)]
    tab: Option<String>,
}

/// Tab named by a `location.search` string, if it names a known one.
pub fn tab_from_search(search: &str) -> Option<TabId> {
    let query: TabQuery = serde_qs::from_str(search.trim_start_matches('?')).ok()?;
    query.tab.as_deref().and_then(TabId::parse)
}

pub fn search_for_tab(tab: TabId) -> String {
    let query = TabQuery {
        tab: Some(tab.as_str().to_string()),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

impl ViewManager {
    /// Restores the tab from the URL, then keeps the URL following the tab.
    pub fn init_url_sync(&self) {
        if !self.features.document {
            return;
        }
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(tab) = tab_from_search(&search) {
            self.switch_tab(tab);
        }

        let active_tab = self.active_tab;
        Effect::new(move |_| {
            let new_search = search_for_tab(active_tab.get());
            let current = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current == new_search {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_search),
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_round_trips_through_query() {
        for tab in TabId::all() {
            assert_eq!(tab_from_search(&search_for_tab(tab)), Some(tab));
        }
        assert_eq!(search_for_tab(TabId::Config), "?tab=config");
    }

    #[test]
    fn test_unknown_or_missing_tab() {
        assert_eq!(tab_from_search(""), None);
        assert_eq!(tab_from_search("?tab=dashboard"), None);
        assert_eq!(tab_from_search("?active=config"), None);
    }
}
