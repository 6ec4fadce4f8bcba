use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;
use contracts::analysis::*;
use contracts::chat::{ChatMessage, ChatRole, ChatWeblogRequest, ChatWeblogResponse};
use contracts::config::*;
use contracts::translation::TranslateRequest;
use futures::executor::block_on;
use serde_json::{json, Value};
use uuid::Uuid;

use super::config::{CONFIG_LOADED_MESSAGE, RESET_CONFIRM_MESSAGE};
use super::weblog::{CHAT_EMPTY_MESSAGE, CHAT_NO_CONTEXT_MESSAGE, WEBLOG_EMPTY_MESSAGE};
use super::*;
use crate::layout::view_manager::{ActionId, FilePicker, InputField, PanelId};
use crate::shared::api_client::ApiError;
use crate::shared::settings::AppSettings;

// ---- backend double -------------------------------------------------------

#[derive(Default)]
struct ScriptedBackend {
    /// (endpoint, request body) in call order.
    calls: RefCell<Vec<(&'static str, Value)>>,
    /// Next analysis-style call fails with this error.
    fail_next: RefCell<Option<ApiError>>,
    analysis_extra: RefCell<AnalysisResponse>,
    chat_reply: RefCell<Option<Result<ChatWeblogResponse, ApiError>>>,
    stored: RefCell<ConfigSections>,
    validation: RefCell<ValidateConfigResponse>,
}

impl ScriptedBackend {
    fn record(&self, endpoint: &'static str, body: Value) {
        self.calls.borrow_mut().push((endpoint, body));
    }

    fn endpoints(&self) -> Vec<&'static str> {
        self.calls.borrow().iter().map(|(e, _)| *e).collect()
    }

    fn last_body(&self) -> Value {
        self.calls
            .borrow()
            .last()
            .map(|(_, body)| body.clone())
            .unwrap_or(Value::Null)
    }

    fn analysis(&self, endpoint: &'static str, body: Value) -> Result<AnalysisResponse, ApiError> {
        self.record(endpoint, body);
        if let Some(err) = self.fail_next.borrow_mut().take() {
            return Err(err);
        }
        Ok(AnalysisResponse {
            result: format!("{} ok", endpoint),
            ..self.analysis_extra.borrow().clone()
        })
    }
}

#[async_trait(?Send)]
impl AnalysisBackend for ScriptedBackend {
    async fn analyze_traffic(&self, req: AnalyzeTrafficRequest) -> Result<AnalysisResponse, ApiError> {
        self.analysis("analyze_traffic", serde_json::to_value(req).unwrap())
    }
    async fn decode(&self, req: DecodeRequest) -> Result<AnalysisResponse, ApiError> {
        self.analysis("decode", serde_json::to_value(req).unwrap())
    }
    async fn audit_js(&self, req: AuditJsRequest) -> Result<AnalysisResponse, ApiError> {
        self.analysis("audit_js", serde_json::to_value(req).unwrap())
    }
    async fn analyze_process(&self, req: AnalyzeProcessRequest) -> Result<AnalysisResponse, ApiError> {
        self.analysis("analyze_process", serde_json::to_value(req).unwrap())
    }
    async fn generate_regex(&self, req: GenerateRegexRequest) -> Result<AnalysisResponse, ApiError> {
        self.analysis("generate_regex", serde_json::to_value(req).unwrap())
    }
    async fn detect_webshell(&self, req: DetectWebshellRequest) -> Result<AnalysisResponse, ApiError> {
        self.analysis("detect_webshell", serde_json::to_value(req).unwrap())
    }
    async fn analyze_weblog(&self, req: AnalyzeWeblogRequest) -> Result<AnalysisResponse, ApiError> {
        self.analysis("analyze_weblog", serde_json::to_value(req).unwrap())
    }
    async fn chat_weblog(&self, req: ChatWeblogRequest) -> Result<ChatWeblogResponse, ApiError> {
        self.record("chat_weblog", serde_json::to_value(req).unwrap());
        self.chat_reply.borrow_mut().take().unwrap_or_else(|| {
            Ok(ChatWeblogResponse {
                result: Some("answer".into()),
                answer: None,
            })
        })
    }
    async fn translate(&self, req: TranslateRequest) -> Result<AnalysisResponse, ApiError> {
        self.analysis("translate", serde_json::to_value(req).unwrap())
    }
    async fn get_config(&self) -> Result<GetConfigResponse, ApiError> {
        self.record("get_config", Value::Null);
        Ok(GetConfigResponse {
            config: self.stored.borrow().clone(),
        })
    }
    async fn save_config(&self, doc: ConfigDocument) -> Result<ResultMessage, ApiError> {
        let body = serde_json::to_value(&doc).unwrap();
        self.record("save_config", body.clone());
        let mut stored = self.stored.borrow_mut();
        for (section, entries) in body.as_object().unwrap() {
            let target = stored.entry(section.clone()).or_default();
            for (key, value) in entries.as_object().unwrap() {
                target.insert(key.clone(), value.as_str().unwrap().to_string());
            }
        }
        Ok(ResultMessage {
            result: "配置保存成功".into(),
        })
    }
    async fn test_config(&self, req: TestConfigRequest) -> Result<TestConfigResponse, ApiError> {
        self.record("test_config", serde_json::to_value(req).unwrap());
        Ok(TestConfigResponse {
            success: true,
            message: Some("连接测试成功".into()),
            result: None,
        })
    }
    async fn validate_config(&self) -> Result<ValidateConfigResponse, ApiError> {
        self.record("validate_config", Value::Null);
        Ok(self.validation.borrow().clone())
    }
    async fn reset_config(&self) -> Result<ResultMessage, ApiError> {
        self.record("reset_config", json!({}));
        let mut stored = self.stored.borrow_mut();
        stored.clear();
        stored.insert(
            "api".into(),
            [("type".to_string(), "openrouter".to_string())].into_iter().collect(),
        );
        Ok(ResultMessage {
            result: "配置已重置为默认值".into(),
        })
    }
    async fn get_api_info(&self) -> Result<ApiInfo, ApiError> {
        self.record("get_api_info", Value::Null);
        Ok(ApiInfo {
            api_type: "deepseek".into(),
            api_url: "https://api.deepseek.com/v1/chat/completions".into(),
            model: "deepseek-chat".into(),
            has_api_key: true,
        })
    }
}

// ---- view double ----------------------------------------------------------

#[derive(Default)]
struct ViewLog {
    inputs: HashMap<InputField, String>,
    log_types: Vec<LogAnalysisType>,
    files: HashMap<FilePicker, Vec<String>>,
    busy: HashSet<ActionId>,
    busy_history: Vec<(ActionId, bool)>,
    loading: Option<String>,
    progress: Vec<u8>,
    panels: HashMap<PanelId, (String, bool)>,
    verdicts: HashMap<PanelId, Option<Verdict>>,
    chat: Vec<ChatMessage>,
    chat_visible: bool,
    form: ConfigForm,
    confirm_answer: bool,
    confirmations: Vec<String>,
    deferred: Vec<(u32, DeferredTask)>,
}

#[derive(Clone, Default)]
struct RecordingView(Rc<RefCell<ViewLog>>);

impl RecordingView {
    fn set(&self, field: InputField, value: &str) {
        self.0.borrow_mut().inputs.insert(field, value.to_string());
    }

    fn panel(&self, panel: PanelId) -> Option<(String, bool)> {
        self.0.borrow().panels.get(&panel).cloned()
    }

    fn chat(&self) -> Vec<(ChatRole, String)> {
        self.0
            .borrow()
            .chat
            .iter()
            .map(|m| (m.role, m.content.clone()))
            .collect()
    }

    fn assert_idle(&self) {
        let log = self.0.borrow();
        assert!(log.busy.is_empty(), "busy flags left: {:?}", log.busy);
        assert!(log.loading.is_none(), "overlay left visible");
    }
}

impl ViewPort for RecordingView {
    fn input_value(&self, field: InputField) -> String {
        self.0.borrow().inputs.get(&field).cloned().unwrap_or_default()
    }
    fn set_input_value(&self, field: InputField, value: String) {
        self.0.borrow_mut().inputs.insert(field, value);
    }
    fn checked_log_types(&self) -> Vec<LogAnalysisType> {
        self.0.borrow().log_types.clone()
    }
    fn selected_file_names(&self, picker: FilePicker) -> Vec<String> {
        self.0.borrow().files.get(&picker).cloned().unwrap_or_default()
    }
    fn set_button_busy(&self, action: ActionId, busy: bool) {
        let mut log = self.0.borrow_mut();
        if busy {
            log.busy.insert(action);
        } else {
            log.busy.remove(&action);
        }
        log.busy_history.push((action, busy));
    }
    fn show_loading(&self, message: &str) {
        self.0.borrow_mut().loading = Some(message.to_string());
    }
    fn update_progress(&self, percentage: u8) {
        self.0.borrow_mut().progress.push(percentage);
    }
    fn hide_loading(&self) {
        self.0.borrow_mut().loading = None;
    }
    fn show_result(&self, panel: PanelId, text: &str) {
        self.0.borrow_mut().panels.insert(panel, (text.to_string(), false));
    }
    fn show_error(&self, panel: PanelId, message: &str) {
        self.0
            .borrow_mut()
            .panels
            .insert(panel, (format!("错误: {}", message), true));
    }
    fn show_verdict(&self, panel: PanelId, verdict: Option<Verdict>) {
        self.0.borrow_mut().verdicts.insert(panel, verdict);
    }
    fn clear_panel(&self, panel: PanelId) {
        self.0.borrow_mut().panels.remove(&panel);
    }
    fn add_chat_message(&self, role: ChatRole, content: &str) -> Uuid {
        let message = ChatMessage::new(role, content);
        let id = message.id;
        self.0.borrow_mut().chat.push(message);
        id
    }
    fn remove_chat_message(&self, id: Uuid) {
        self.0.borrow_mut().chat.retain(|m| m.id != id);
    }
    fn clear_chat(&self) {
        self.0.borrow_mut().chat.clear();
    }
    fn reveal_chat(&self) {
        self.0.borrow_mut().chat_visible = true;
    }
    fn read_config_form(&self) -> ConfigForm {
        self.0.borrow().form.clone()
    }
    fn fill_config_form(&self, sections: &ConfigSections) {
        self.0.borrow_mut().form.apply_sections(sections);
    }
    fn confirm(&self, message: &str) -> bool {
        let mut log = self.0.borrow_mut();
        log.confirmations.push(message.to_string());
        log.confirm_answer
    }
    fn defer(&self, delay_ms: u32, task: DeferredTask) {
        self.0.borrow_mut().deferred.push((delay_ms, task));
    }
}

fn setup() -> (
    AppController<ScriptedBackend, RecordingView>,
    Arc<ScriptedBackend>,
    RecordingView,
) {
    let backend = Arc::new(ScriptedBackend::default());
    let view = RecordingView::default();
    let controller = AppController::new(backend.clone(), view.clone(), &AppSettings::default());
    (controller, backend, view)
}

// ---- analysis -------------------------------------------------------------

#[test]
fn test_every_capability_shows_result_and_clears_busy() {
    for capability in Capability::all() {
        let (controller, backend, view) = setup();
        let wiring = capability.action();
        view.set(wiring.input, "  payload  ");
        if let Some((extra, _)) = wiring.extra {
            view.set(extra, "target");
        }

        let response = block_on(controller.run_analysis(capability)).unwrap();

        assert_eq!(backend.calls.borrow().len(), 1, "{:?}", capability);
        let (text, is_error) = view.panel(wiring.result).unwrap();
        assert_eq!(text, response.result);
        assert!(!is_error);
        assert_eq!(
            view.0.borrow().busy_history,
            vec![(wiring.action, true), (wiring.action, false)]
        );
        assert_eq!(view.0.borrow().progress, vec![0, 100]);
        view.assert_idle();
    }
}

#[test]
fn test_action_table_matches_capabilities() {
    for capability in Capability::all() {
        assert_eq!(capability.action().capability, capability);
    }
}

#[test]
fn test_inputs_are_trimmed() {
    let (controller, backend, view) = setup();
    view.set(InputField::Decode, "\n  aGVsbG8=  \t");
    block_on(controller.run_analysis(Capability::Decode));
    assert_eq!(backend.last_body(), json!({"encoded_str": "aGVsbG8="}));
}

#[test]
fn test_empty_input_never_reaches_backend() {
    for capability in Capability::all() {
        let (controller, backend, view) = setup();
        view.set(capability.action().input, "   ");

        assert!(block_on(controller.run_analysis(capability)).is_none());

        assert!(backend.calls.borrow().is_empty());
        assert!(view.0.borrow().busy_history.is_empty());
        let (text, is_error) = view.panel(capability.action().result).unwrap();
        assert_eq!(text, format!("错误: {}", capability.action().empty_message));
        assert!(is_error);
    }
}

#[test]
fn test_regex_needs_both_inputs() {
    let (controller, backend, view) = setup();
    view.set(InputField::RegexSource, "匹配所有IPv4地址");
    block_on(controller.run_analysis(Capability::Regex));
    assert!(backend.calls.borrow().is_empty());
    assert_eq!(
        view.panel(PanelId::Regex).unwrap().0,
        "错误: 请输入需要匹配的目标内容"
    );

    view.set(InputField::RegexTarget, "192.168.1.1");
    block_on(controller.run_analysis(Capability::Regex));
    assert_eq!(
        backend.last_body(),
        json!({"source_text": "匹配所有IPv4地址", "target_text": "192.168.1.1"})
    );
}

#[test]
fn test_webshell_sends_first_picked_file_name() {
    let (controller, backend, view) = setup();
    view.set(InputField::Webshell, "<?php eval($_POST['x']); ?>");
    view.0
        .borrow_mut()
        .files
        .insert(FilePicker::File, vec!["shell.php".into(), "other.php".into()]);
    *backend.analysis_extra.borrow_mut() = AnalysisResponse {
        is_webshell: Some(true),
        threat_level: Some("高危".into()),
        ..Default::default()
    };

    block_on(controller.run_analysis(Capability::Webshell));

    assert_eq!(backend.last_body()["file_name"], "shell.php");
    assert_eq!(
        view.0.borrow().verdicts.get(&PanelId::Webshell),
        Some(&Some(Verdict::Webshell {
            threat_level: Some("高危".into())
        }))
    );
}

#[test]
fn test_failure_shows_error_and_clears_busy() {
    let (controller, backend, view) = setup();
    view.set(InputField::Traffic, "GET / HTTP/1.1");
    *backend.fail_next.borrow_mut() = Some(ApiError::Request {
        status: 500,
        message: "分析失败".into(),
        code: None,
        details: vec![],
    });

    assert!(block_on(controller.run_analysis(Capability::Traffic)).is_none());

    assert_eq!(
        view.panel(PanelId::Traffic),
        Some(("错误: 分析失败".to_string(), true))
    );
    assert_eq!(view.0.borrow().progress, vec![0]);
    view.assert_idle();
}

#[test]
fn test_later_result_overwrites_panel() {
    let (controller, backend, view) = setup();
    view.set(InputField::Process, "ps aux");
    block_on(controller.run_analysis(Capability::Process));
    *backend.fail_next.borrow_mut() = Some(ApiError::Transport("offline".into()));
    block_on(controller.run_analysis(Capability::Process));
    assert_eq!(
        view.panel(PanelId::Process),
        Some(("错误: offline".to_string(), true))
    );
}

// ---- translation ----------------------------------------------------------

#[test]
fn test_translation_detects_source_language() {
    let (controller, backend, view) = setup();
    view.set(InputField::TranslateText, "你好");
    view.set(InputField::TargetLanguage, "ja");
    block_on(controller.run_translation());
    assert_eq!(
        backend.last_body(),
        json!({"text": "你好", "source_lang": "zh", "target_lang": "ja"})
    );

    view.set(InputField::TranslateText, "hello");
    view.set(InputField::TargetLanguage, "");
    block_on(controller.run_translation());
    assert_eq!(
        backend.last_body(),
        json!({"text": "hello", "source_lang": "en", "target_lang": "en"})
    );
    view.assert_idle();
}

#[test]
fn test_translation_requires_text() {
    let (controller, backend, view) = setup();
    block_on(controller.run_translation());
    assert!(backend.calls.borrow().is_empty());
    assert_eq!(
        view.panel(PanelId::Translate).unwrap().0,
        "错误: 请输入需要翻译的文本"
    );
}

#[test]
fn test_clear_translation() {
    let (controller, _backend, view) = setup();
    view.set(InputField::TranslateText, "hello");
    view.show_result(PanelId::Translate, "你好");
    controller.clear_translation();
    assert_eq!(view.input_value(InputField::TranslateText), "");
    assert_eq!(view.panel(PanelId::Translate), None);
}

// ---- web log and chat -----------------------------------------------------

fn analyze_log(
    controller: &AppController<ScriptedBackend, RecordingView>,
    view: &RecordingView,
    log: &str,
) -> Option<AnalysisResponse> {
    view.set(InputField::Weblog, log);
    block_on(controller.run_weblog_analysis())
}

#[test]
fn test_weblog_requires_content() {
    let (controller, backend, view) = setup();
    assert!(analyze_log(&controller, &view, "").is_none());
    assert!(backend.calls.borrow().is_empty());
    assert_eq!(
        view.panel(PanelId::Weblog).unwrap().0,
        format!("错误: {}", WEBLOG_EMPTY_MESSAGE)
    );
}

#[test]
fn test_weblog_sends_checked_types_and_sets_context() {
    let (controller, backend, view) = setup();
    view.0.borrow_mut().log_types = vec![LogAnalysisType::Attack, LogAnalysisType::Statistics];

    analyze_log(&controller, &view, "1.2.3.4 - - GET /admin 403").unwrap();

    assert_eq!(
        backend.last_body(),
        json!({"log_content": "1.2.3.4 - - GET /admin 403", "analysis_types": ["攻击检测", "访问统计"]})
    );
    assert!(view.0.borrow().chat_visible);
    assert_eq!(
        controller.chat_context().unwrap().analysis_result,
        "analyze_weblog ok"
    );
    view.assert_idle();
}

#[test]
fn test_failed_analysis_keeps_previous_context() {
    let (controller, backend, view) = setup();
    analyze_log(&controller, &view, "first log").unwrap();
    *backend.fail_next.borrow_mut() = Some(ApiError::Transport("offline".into()));
    assert!(analyze_log(&controller, &view, "second log").is_none());
    assert_eq!(controller.chat_context().unwrap().log_content, "first log");
}

#[test]
fn test_chat_before_analysis_shows_guidance() {
    let (controller, backend, view) = setup();
    view.set(InputField::ChatQuestion, "有哪些攻击？");
    block_on(controller.send_chat_message());
    assert!(backend.calls.borrow().is_empty());
    assert_eq!(
        view.panel(PanelId::Chat).unwrap().0,
        format!("错误: {}", CHAT_NO_CONTEXT_MESSAGE)
    );
    assert!(view.chat().is_empty());
}

#[test]
fn test_chat_requires_question() {
    let (controller, backend, view) = setup();
    analyze_log(&controller, &view, "log").unwrap();
    view.set(InputField::ChatQuestion, "  ");
    block_on(controller.send_chat_message());
    assert_eq!(backend.endpoints(), vec!["analyze_weblog"]);
    assert_eq!(
        view.panel(PanelId::Chat).unwrap().0,
        format!("错误: {}", CHAT_EMPTY_MESSAGE)
    );
}

#[test]
fn test_chat_exchange_replaces_placeholder() {
    let (controller, backend, view) = setup();
    analyze_log(&controller, &view, "GET /etc/passwd").unwrap();
    view.set(InputField::ChatQuestion, "这是攻击吗？");

    block_on(controller.send_chat_message());

    assert_eq!(
        view.chat(),
        vec![
            (ChatRole::User, "这是攻击吗？".to_string()),
            (ChatRole::Assistant, "answer".to_string()),
        ]
    );
    assert_eq!(view.input_value(InputField::ChatQuestion), "");
    assert_eq!(
        backend.last_body(),
        json!({
            "question": "这是攻击吗？",
            "log_content": "GET /etc/passwd",
            "analysis_result": "analyze_weblog ok"
        })
    );
    view.assert_idle();
}

#[test]
fn test_chat_uses_latest_analysis() {
    let (controller, backend, view) = setup();
    analyze_log(&controller, &view, "first").unwrap();
    analyze_log(&controller, &view, "second").unwrap();
    view.set(InputField::ChatQuestion, "q");
    block_on(controller.send_chat_message());
    assert_eq!(backend.last_body()["log_content"], "second");
}

#[test]
fn test_chat_failure_is_categorized() {
    let (controller, backend, view) = setup();
    analyze_log(&controller, &view, "log").unwrap();
    view.set(InputField::ChatQuestion, "q");
    *backend.chat_reply.borrow_mut() = Some(Err(ApiError::Request {
        status: 500,
        message: "AI服务调用失败".into(),
        code: Some("INTERNAL_ERROR".into()),
        details: vec![],
    }));

    block_on(controller.send_chat_message());

    let chat = view.chat();
    assert_eq!(chat.len(), 2);
    assert_eq!(chat[1].0, ChatRole::Assistant);
    assert!(chat[1].1.starts_with("服务器处理出现问题"));
    assert!(!chat.iter().any(|(_, text)| text == THINKING_PLACEHOLDER));
}

#[test]
fn test_chat_empty_answer_falls_back() {
    let (controller, backend, view) = setup();
    analyze_log(&controller, &view, "log").unwrap();
    view.set(InputField::ChatQuestion, "q");
    *backend.chat_reply.borrow_mut() = Some(Ok(ChatWeblogResponse::default()));
    block_on(controller.send_chat_message());
    assert_eq!(view.chat()[1].1, "抱歉，无法获取回复");
}

#[test]
fn test_describe_chat_failure() {
    let validation = ApiError::Request {
        status: 400,
        message: "输入验证失败".into(),
        code: Some("VALIDATION_FAILED".into()),
        details: vec!["question 过长".into()],
    };
    assert_eq!(
        describe_chat_failure(&validation),
        "输入验证失败：输入验证失败: question 过长"
    );

    let too_long = ApiError::Request {
        status: 400,
        message: "超出最大token限制".into(),
        code: None,
        details: vec![],
    };
    assert!(describe_chat_failure(&too_long).starts_with("文本内容过长"));

    let other = ApiError::Transport("网络请求失败: timeout".into());
    assert_eq!(describe_chat_failure(&other), "错误：网络请求失败: timeout");
}

#[test]
fn test_clear_chat_and_log() {
    let (controller, _backend, view) = setup();
    analyze_log(&controller, &view, "log").unwrap();
    view.set(InputField::ChatQuestion, "q");
    block_on(controller.send_chat_message());

    controller.clear_chat();
    assert!(view.chat().is_empty());
    assert!(controller.chat_context().is_some());

    controller.clear_weblog();
    assert_eq!(view.input_value(InputField::Weblog), "");
    assert_eq!(view.panel(PanelId::Weblog), None);
}

// ---- configuration --------------------------------------------------------

fn fill_form(view: &RecordingView, provider: &str, entries: &[(Provider, ProviderForm)]) {
    view.0.borrow_mut().form = ConfigForm {
        provider: provider.to_string(),
        providers: entries.iter().cloned().collect(),
    };
}

#[test]
fn test_save_then_load_reproduces_form() {
    let (controller, backend, view) = setup();
    let deepseek = ProviderForm {
        url: "https://api.deepseek.com/v1/chat/completions".into(),
        key: "sk-test".into(),
        model: "deepseek-chat".into(),
    };
    fill_form(&view, "deepseek", &[(Provider::Deepseek, deepseek.clone())]);

    assert!(block_on(controller.save_config()));
    assert_eq!(
        view.panel(PanelId::Config),
        Some(("配置保存成功".to_string(), false))
    );
    assert_eq!(backend.last_body()["api"], json!({"type": "deepseek"}));

    view.0.borrow_mut().form = ConfigForm::default();
    assert!(block_on(controller.load_config()));

    let form = view.read_config_form();
    assert_eq!(form.provider, "deepseek");
    assert_eq!(form.provider_form(Provider::Deepseek), deepseek);
    assert_eq!(
        view.panel(PanelId::Config).unwrap().0,
        CONFIG_LOADED_MESSAGE
    );
    view.assert_idle();
}

#[test]
fn test_test_config_validates_locally() {
    let (controller, backend, view) = setup();
    fill_form(&view, "", &[]);
    assert!(!block_on(controller.test_config()));
    assert_eq!(
        view.panel(PanelId::Config),
        Some(("错误: 请选择API类型".to_string(), true))
    );

    fill_form(&view, "ollama", &[]);
    assert!(!block_on(controller.test_config()));
    assert_eq!(
        view.panel(PanelId::Config).unwrap().0,
        "错误: 请配置ollama的相关参数"
    );
    assert!(backend.calls.borrow().is_empty());
}

#[test]
fn test_test_config_sends_selected_provider() {
    let (controller, backend, view) = setup();
    fill_form(
        &view,
        "ollama",
        &[(
            Provider::Ollama,
            ProviderForm {
                url: "http://localhost:11434/api/chat".into(),
                key: String::new(),
                model: "qwen2.5-coder:14b".into(),
            },
        )],
    );
    assert!(block_on(controller.test_config()));
    assert_eq!(
        backend.last_body(),
        json!({
            "api_type": "ollama",
            "api_url": "http://localhost:11434/api/chat",
            "api_key": "",
            "model": "qwen2.5-coder:14b"
        })
    );
    assert_eq!(view.panel(PanelId::Config).unwrap().0, "连接测试成功");
}

#[test]
fn test_validate_failure_lists_errors() {
    let (controller, backend, view) = setup();
    *backend.validation.borrow_mut() = ValidateConfigResponse {
        valid: false,
        errors: vec!["a".into(), "b".into()],
    };
    assert!(!block_on(controller.validate_config()));
    assert_eq!(
        view.panel(PanelId::Config),
        Some(("错误: 配置验证失败: a, b".to_string(), true))
    );
    view.assert_idle();
}

#[test]
fn test_reset_requires_confirmation() {
    let (controller, backend, view) = setup();
    assert!(!block_on(controller.reset_config()));
    assert!(backend.calls.borrow().is_empty());
    assert_eq!(
        view.0.borrow().confirmations,
        vec![RESET_CONFIRM_MESSAGE.to_string()]
    );
}

#[test]
fn test_reset_schedules_reload() {
    let (controller, backend, view) = setup();
    view.0.borrow_mut().confirm_answer = true;
    fill_form(&view, "deepseek", &[]);

    assert!(block_on(controller.reset_config()));
    assert_eq!(backend.endpoints(), vec!["reset_config"]);

    let (delay, task) = view.0.borrow_mut().deferred.pop().unwrap();
    assert_eq!(delay, 1000);
    block_on(task);

    assert_eq!(backend.endpoints(), vec!["reset_config", "get_config"]);
    assert_eq!(view.read_config_form().provider, "openrouter");
    view.assert_idle();
}

#[test]
fn test_api_info_summary() {
    let (controller, _backend, view) = setup();
    assert!(block_on(controller.show_api_info()));
    let (text, _) = view.panel(PanelId::Config).unwrap();
    assert!(text.contains("deepseek-chat"));
    assert!(text.contains("已配置"));
}
