//! View state of the console.
//!
//! [`ViewManager`] owns every piece of UI state the controller drives: the
//! theme, the active tab, the sidebar, the loading overlay, button busy flags,
//! result panels, the chat transcript and the input values. It is `Copy` and is
//! provided as context at the root; components read its signals and the
//! controller writes through the `ViewPort` seam.

mod chat;
mod config_form;
mod ids;
mod url_sync;

pub use chat::{ChatBounds, ChatLayout, ChatMetrics, ChatTranscript};
pub use config_form::{ConfigFormVm, ProviderFieldsVm, DEFAULT_PROVIDER};
pub use ids::{ActionId, FilePicker, InputField, PanelId, TabId};
pub use url_sync::{search_for_tab, tab_from_search};

use crate::layout::file_inputs::FileInputRegistry;
use crate::shared::features::ViewFeatures;
use crate::shared::settings::AppSettings;
use crate::shared::theme::{apply_theme_attribute, load_theme, save_theme, PreferenceStore, Theme};
use contracts::analysis::{LogAnalysisType, Verdict};
use contracts::translation::DEFAULT_TARGET_LANGUAGE;
use leptos::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

pub const DEFAULT_LOADING_MESSAGE: &str = "正在处理中...";

#[derive(Clone, Debug, PartialEq)]
pub struct LoadingState {
    pub visible: bool,
    pub message: String,
    /// Percentage, 0..=100.
    pub progress: u8,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self {
            visible: false,
            message: DEFAULT_LOADING_MESSAGE.to_string(),
            progress: 0,
        }
    }
}

/// What a result panel currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelContent {
    pub text: String,
    pub is_error: bool,
    pub verdict: Option<Verdict>,
}

/// Files chosen through one picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSelection {
    pub names: Vec<String>,
}

impl FileSelection {
    pub fn label(&self) -> String {
        format!("已选择 {} 个文件", self.names.len())
    }

    pub fn title(&self) -> String {
        self.names.join(", ")
    }
}

#[derive(Clone, Copy)]
struct InputFields {
    traffic: RwSignal<String>,
    decode: RwSignal<String>,
    js_code: RwSignal<String>,
    process: RwSignal<String>,
    regex_source: RwSignal<String>,
    regex_target: RwSignal<String>,
    webshell: RwSignal<String>,
    weblog: RwSignal<String>,
    chat_question: RwSignal<String>,
    translate_text: RwSignal<String>,
    target_language: RwSignal<String>,
}

impl InputFields {
    fn new() -> Self {
        let empty = || RwSignal::new(String::new());
        Self {
            traffic: empty(),
            decode: empty(),
            js_code: empty(),
            process: empty(),
            regex_source: empty(),
            regex_target: empty(),
            webshell: empty(),
            weblog: empty(),
            chat_question: empty(),
            translate_text: empty(),
            target_language: RwSignal::new(DEFAULT_TARGET_LANGUAGE.to_string()),
        }
    }

    fn get(&self, field: InputField) -> RwSignal<String> {
        match field {
            InputField::Traffic => self.traffic,
            InputField::Decode => self.decode,
            InputField::JsCode => self.js_code,
            InputField::Process => self.process,
            InputField::RegexSource => self.regex_source,
            InputField::RegexTarget => self.regex_target,
            InputField::Webshell => self.webshell,
            InputField::Weblog => self.weblog,
            InputField::ChatQuestion => self.chat_question,
            InputField::TranslateText => self.translate_text,
            InputField::TargetLanguage => self.target_language,
        }
    }
}

#[derive(Clone, Copy)]
struct LogTypeFlags {
    attack: RwSignal<bool>,
    anomaly: RwSignal<bool>,
    statistics: RwSignal<bool>,
    performance: RwSignal<bool>,
}

impl LogTypeFlags {
    fn new() -> Self {
        let flag = |t: LogAnalysisType| RwSignal::new(t.checked_by_default());
        Self {
            attack: flag(LogAnalysisType::Attack),
            anomaly: flag(LogAnalysisType::Anomaly),
            statistics: flag(LogAnalysisType::Statistics),
            performance: flag(LogAnalysisType::Performance),
        }
    }

    fn get(&self, t: LogAnalysisType) -> RwSignal<bool> {
        match t {
            LogAnalysisType::Attack => self.attack,
            LogAnalysisType::Anomaly => self.anomaly,
            LogAnalysisType::Statistics => self.statistics,
            LogAnalysisType::Performance => self.performance,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ViewManager {
    pub features: ViewFeatures,
    pub theme: RwSignal<Theme>,
    pub active_tab: RwSignal<TabId>,
    pub sidebar_collapsed: RwSignal<bool>,
    /// Last known (width, height) of the viewport.
    pub viewport: RwSignal<(f64, f64)>,
    pub loading: RwSignal<LoadingState>,
    pub chat: ChatTranscript,
    pub config_form: ConfigFormVm,
    busy: RwSignal<HashSet<ActionId>>,
    panels: RwSignal<HashMap<PanelId, PanelContent>>,
    selections: RwSignal<HashMap<FilePicker, FileSelection>>,
    inputs: InputFields,
    log_types: LogTypeFlags,
    store: StoredValue<Arc<dyn PreferenceStore>>,
    file_inputs: StoredValue<Option<FileInputRegistry>, LocalStorage>,
    breakpoint_px: f64,
}

impl ViewManager {
    /// Loads the persisted theme and applies it.
    pub fn new(
        features: ViewFeatures,
        store: Arc<dyn PreferenceStore>,
        settings: &AppSettings,
    ) -> Self {
        let theme = load_theme(store.as_ref());
        let vm = Self {
            features,
            theme: RwSignal::new(theme),
            active_tab: RwSignal::new(TabId::default()),
            sidebar_collapsed: RwSignal::new(false),
            viewport: RwSignal::new((0.0, 0.0)),
            loading: RwSignal::new(LoadingState::default()),
            chat: ChatTranscript::new(settings.chat_bounds),
            config_form: ConfigFormVm::new(),
            busy: RwSignal::new(HashSet::new()),
            panels: RwSignal::new(HashMap::new()),
            selections: RwSignal::new(HashMap::new()),
            inputs: InputFields::new(),
            log_types: LogTypeFlags::new(),
            store: StoredValue::new(store),
            file_inputs: StoredValue::new_local(None),
            breakpoint_px: settings.sidebar_breakpoint_px,
        };
        vm.apply_theme(theme);
        vm
    }

    // ---- theme ----------------------------------------------------------

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.store.with_value(|store| save_theme(store.as_ref(), theme));
        self.apply_theme(theme);
        log::debug!("theme set to {}", theme.as_str());
    }

    fn apply_theme(&self, theme: Theme) {
        if self.features.document {
            apply_theme_attribute(theme);
        }
    }

    // ---- navigation -----------------------------------------------------

    pub fn switch_tab(&self, tab: TabId) {
        if self.active_tab.get_untracked() != tab {
            log::debug!("switching to tab {}", tab.as_str());
            self.active_tab.set(tab);
        }
    }

    pub fn is_tab_active(&self, tab: TabId) -> bool {
        self.active_tab.get() == tab
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|collapsed| *collapsed = !*collapsed);
    }

    /// Records the new viewport size and collapses the sidebar on narrow
    /// screens. Widening never expands it again.
    pub fn handle_resize(&self, width: f64, height: f64) {
        self.viewport.set((width, height));
        if width <= self.breakpoint_px && !self.sidebar_collapsed.get_untracked() {
            self.sidebar_collapsed.set(true);
        }
    }

    // ---- loading overlay ------------------------------------------------

    pub fn show_loading(&self, message: &str) {
        self.loading.update(|state| {
            state.visible = true;
            state.message = if message.is_empty() {
                DEFAULT_LOADING_MESSAGE.to_string()
            } else {
                message.to_string()
            };
        });
    }

    pub fn update_progress(&self, percentage: u8) {
        self.loading
            .update(|state| state.progress = percentage.min(100));
    }

    pub fn hide_loading(&self) {
        self.loading.update(|state| state.visible = false);
    }

    // ---- buttons --------------------------------------------------------

    pub fn set_button_busy(&self, action: ActionId, busy: bool) {
        self.busy.update(|set| {
            if busy {
                set.insert(action);
            } else {
                set.remove(&action);
            }
        });
    }

    pub fn is_busy(&self, action: ActionId) -> bool {
        self.busy.with(|set| set.contains(&action))
    }

    // ---- result panels --------------------------------------------------

    pub fn show_result(&self, panel: PanelId, text: &str) {
        self.set_panel(
            panel,
            PanelContent {
                text: text.to_string(),
                is_error: false,
                verdict: None,
            },
        );
    }

    /// Shows `错误: {message}` in error styling.
    pub fn show_error(&self, panel: PanelId, message: &str) {
        self.set_panel(
            panel,
            PanelContent {
                text: format!("错误: {}", message),
                is_error: true,
                verdict: None,
            },
        );
    }

    pub fn show_verdict(&self, panel: PanelId, verdict: Option<Verdict>) {
        self.panels.update(|panels| {
            if let Some(content) = panels.get_mut(&panel) {
                content.verdict = verdict;
            }
        });
    }

    pub fn clear_panel(&self, panel: PanelId) {
        self.panels.update(|panels| {
            panels.remove(&panel);
        });
    }

    pub fn panel(&self, panel: PanelId) -> Option<PanelContent> {
        self.panels.with(|panels| panels.get(&panel).cloned())
    }

    fn set_panel(&self, panel: PanelId, content: PanelContent) {
        self.panels.update(|panels| {
            panels.insert(panel, content);
        });
    }

    // ---- inputs ---------------------------------------------------------

    pub fn field(&self, field: InputField) -> RwSignal<String> {
        self.inputs.get(field)
    }

    pub fn log_type_flag(&self, t: LogAnalysisType) -> RwSignal<bool> {
        self.log_types.get(t)
    }

    /// Checked analysis types in display order.
    pub fn checked_log_types(&self) -> Vec<LogAnalysisType> {
        LogAnalysisType::all()
            .into_iter()
            .filter(|t| self.log_types.get(*t).get_untracked())
            .collect()
    }

    // ---- file pickers ---------------------------------------------------

    pub fn attach_file_inputs(&self, registry: Option<FileInputRegistry>) {
        self.file_inputs.set_value(registry);
    }

    pub fn open_file_picker(&self, picker: FilePicker) {
        self.file_inputs.with_value(|registry| match registry {
            Some(registry) => registry.open(picker),
            None => log::debug!("file picker '{}' unavailable", picker.button_id()),
        });
    }

    /// Stores a non-empty selection. An empty one leaves the previous label.
    pub fn record_file_selection(
        &self,
        picker: FilePicker,
        names: Vec<String>,
    ) -> Option<FileSelection> {
        if names.is_empty() {
            return None;
        }
        let selection = FileSelection { names };
        self.selections.update(|map| {
            map.insert(picker, selection.clone());
        });
        Some(selection)
    }

    pub fn file_selection(&self, picker: FilePicker) -> Option<FileSelection> {
        self.selections.with(|map| map.get(&picker).cloned())
    }

    /// Document-level measurements of the chat panel, when a document exists.
    pub fn measure_chat(&self) -> Option<ChatMetrics> {
        if !self.features.document {
            return None;
        }
        let window = web_sys::window()?;
        let document = window.document()?;
        let height_of = |id: &str| {
            document
                .get_element_by_id(id)
                .map(|el| el.scroll_height() as f64)
        };
        let viewport_height = window.inner_height().ok()?.as_f64()?;
        Some(ChatMetrics {
            content_height: height_of("weblog-chat-messages").unwrap_or(0.0),
            viewport_height,
            input_row_height: height_of("weblog-chat-input-row"),
            actions_row_height: height_of("weblog-chat-actions"),
        })
    }
}
