use std::future::Future;
use std::pin::Pin;

use contracts::analysis::{LogAnalysisType, Verdict};
use contracts::chat::ChatRole;
use contracts::config::{ConfigForm, ConfigSections};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::layout::view_manager::{ActionId, FilePicker, InputField, PanelId, ViewManager};

pub type DeferredTask = Pin<Box<dyn Future<Output = ()>>>;

/// What the controller needs from the view. Implemented by [`ViewManager`]
/// and by a recording double in tests.
pub trait ViewPort: Clone + 'static {
    fn input_value(&self, field: InputField) -> String;
    fn set_input_value(&self, field: InputField, value: String);
    fn checked_log_types(&self) -> Vec<LogAnalysisType>;
    fn selected_file_names(&self, picker: FilePicker) -> Vec<String>;

    fn set_button_busy(&self, action: ActionId, busy: bool);
    fn show_loading(&self, message: &str);
    fn update_progress(&self, percentage: u8);
    fn hide_loading(&self);

    fn show_result(&self, panel: PanelId, text: &str);
    fn show_error(&self, panel: PanelId, message: &str);
    fn show_verdict(&self, panel: PanelId, verdict: Option<Verdict>);
    fn clear_panel(&self, panel: PanelId);

    fn add_chat_message(&self, role: ChatRole, content: &str) -> Uuid;
    fn remove_chat_message(&self, id: Uuid);
    fn clear_chat(&self);
    fn reveal_chat(&self);

    fn read_config_form(&self) -> ConfigForm;
    fn fill_config_form(&self, sections: &ConfigSections);

    fn confirm(&self, message: &str) -> bool;
    /// Runs `task` after `delay_ms`.
    fn defer(&self, delay_ms: u32, task: DeferredTask);
}

impl ViewPort for ViewManager {
    fn input_value(&self, field: InputField) -> String {
        self.field(field).get_untracked()
    }

    fn set_input_value(&self, field: InputField, value: String) {
        self.field(field).set(value);
    }

    fn checked_log_types(&self) -> Vec<LogAnalysisType> {
        ViewManager::checked_log_types(self)
    }

    fn selected_file_names(&self, picker: FilePicker) -> Vec<String> {
        self.file_selection(picker)
            .map(|selection| selection.names)
            .unwrap_or_default()
    }

    fn set_button_busy(&self, action: ActionId, busy: bool) {
        ViewManager::set_button_busy(self, action, busy);
    }

    fn show_loading(&self, message: &str) {
        ViewManager::show_loading(self, message);
    }

    fn update_progress(&self, percentage: u8) {
        ViewManager::update_progress(self, percentage);
    }

    fn hide_loading(&self) {
        ViewManager::hide_loading(self);
    }

    fn show_result(&self, panel: PanelId, text: &str) {
        ViewManager::show_result(self, panel, text);
    }

    fn show_error(&self, panel: PanelId, message: &str) {
        ViewManager::show_error(self, panel, message);
    }

    fn show_verdict(&self, panel: PanelId, verdict: Option<Verdict>) {
        ViewManager::show_verdict(self, panel, verdict);
    }

    fn clear_panel(&self, panel: PanelId) {
        ViewManager::clear_panel(self, panel);
    }

    fn add_chat_message(&self, role: ChatRole, content: &str) -> Uuid {
        self.chat.append(role, content)
    }

    fn remove_chat_message(&self, id: Uuid) {
        self.chat.remove(id);
    }

    fn clear_chat(&self) {
        self.chat.clear();
    }

    fn reveal_chat(&self) {
        self.chat.reveal();
    }

    fn read_config_form(&self) -> ConfigForm {
        self.config_form.snapshot()
    }

    fn fill_config_form(&self, sections: &ConfigSections) {
        self.config_form.apply_sections(sections);
    }

    fn confirm(&self, message: &str) -> bool {
        if !self.features.document {
            return false;
        }
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn defer(&self, delay_ms: u32, task: DeferredTask) {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            task.await;
        });
    }
}
