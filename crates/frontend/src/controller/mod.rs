//! Application controller.
//!
//! Turns user actions into backend calls and view updates. Handlers validate
//! their inputs first, flag the triggering button busy, call the backend and
//! always leave the busy flag and the loading overlay cleared, whatever the
//! outcome.

mod analysis;
mod backend;
mod config;
mod translation;
mod view_port;
mod weblog;

#[cfg(test)]
mod tests;

pub use analysis::{AnalysisAction, Capability, ANALYSIS_ACTIONS};
pub use backend::AnalysisBackend;
pub use view_port::{DeferredTask, ViewPort};
pub use weblog::{describe_chat_failure, THINKING_PLACEHOLDER};

use contracts::chat::ChatContext;
use leptos::prelude::*;
use std::sync::Arc;

use crate::layout::view_manager::{InputField, ViewManager};
use crate::shared::api_client::ApiClient;
use crate::shared::settings::AppSettings;

pub struct AppController<B, V> {
    backend: Arc<B>,
    view: V,
    chat_context: RwSignal<Option<ChatContext>>,
    reset_reload_delay_ms: u32,
}

impl<B, V: Clone> Clone for AppController<B, V> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            view: self.view.clone(),
            chat_context: self.chat_context,
            reset_reload_delay_ms: self.reset_reload_delay_ms,
        }
    }
}

/// The controller wired to the real client and view.
pub type Controller = AppController<ApiClient, ViewManager>;

impl<B: AnalysisBackend, V: ViewPort> AppController<B, V> {
    pub fn new(backend: Arc<B>, view: V, settings: &AppSettings) -> Self {
        Self {
            backend,
            view,
            chat_context: RwSignal::new(None),
            reset_reload_delay_ms: settings.reset_reload_delay_ms,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Whether a web-log analysis has succeeded this session.
    pub fn has_chat_context(&self) -> bool {
        self.chat_context.with(|ctx| ctx.is_some())
    }

    pub fn chat_context(&self) -> Option<ChatContext> {
        self.chat_context.get_untracked()
    }

    fn trimmed_input(&self, field: InputField) -> String {
        self.view.input_value(field).trim().to_string()
    }
}
