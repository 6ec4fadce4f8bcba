use std::future::Future;

use contracts::analysis::{
    AnalysisResponse, AnalyzeProcessRequest, AnalyzeTrafficRequest, AuditJsRequest,
    DecodeRequest, DetectWebshellRequest, GenerateRegexRequest,
};

use super::{AnalysisBackend, AppController, ViewPort};
use crate::layout::view_manager::{ActionId, FilePicker, InputField, PanelId};
use crate::shared::api_client::ApiError;

/// The single-input analysis tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Traffic = 0,
    Decode = 1,
    JsAudit = 2,
    Process = 3,
    Regex = 4,
    Webshell = 5,
}

impl Capability {
    pub fn all() -> [Capability; 6] {
        [
            Capability::Traffic,
            Capability::Decode,
            Capability::JsAudit,
            Capability::Process,
            Capability::Regex,
            Capability::Webshell,
        ]
    }

    pub fn action(self) -> &'static AnalysisAction {
        &ANALYSIS_ACTIONS[self as usize]
    }
}

/// Wiring of one analysis button: where its input comes from, where its
/// result goes and what the user sees meanwhile.
#[derive(Debug)]
pub struct AnalysisAction {
    pub capability: Capability,
    pub action: ActionId,
    pub input: InputField,
    pub result: PanelId,
    pub empty_message: &'static str,
    pub busy_message: &'static str,
    /// Second required input and its empty message.
    pub extra: Option<(InputField, &'static str)>,
}

pub static ANALYSIS_ACTIONS: [AnalysisAction; 6] = [
    AnalysisAction {
        capability: Capability::Traffic,
        action: ActionId::AnalyzeTraffic,
        input: InputField::Traffic,
        result: PanelId::Traffic,
        empty_message: "请输入HTTP请求数据",
        busy_message: "正在分析网络流量...",
        extra: None,
    },
    AnalysisAction {
        capability: Capability::Decode,
        action: ActionId::Decode,
        input: InputField::Decode,
        result: PanelId::Decode,
        empty_message: "请输入需要解码的字符串",
        busy_message: "正在解码中...",
        extra: None,
    },
    AnalysisAction {
        capability: Capability::JsAudit,
        action: ActionId::AuditJs,
        input: InputField::JsCode,
        result: PanelId::JsAudit,
        empty_message: "请输入JavaScript代码",
        busy_message: "正在审计JavaScript代码...",
        extra: None,
    },
    AnalysisAction {
        capability: Capability::Process,
        action: ActionId::AnalyzeProcess,
        input: InputField::Process,
        result: PanelId::Process,
        empty_message: "请输入进程信息",
        busy_message: "正在分析进程信息...",
        extra: None,
    },
    AnalysisAction {
        capability: Capability::Regex,
        action: ActionId::GenerateRegex,
        input: InputField::RegexSource,
        result: PanelId::Regex,
        empty_message: "请输入需求描述",
        busy_message: "正在生成正则表达式...",
        extra: Some((InputField::RegexTarget, "请输入需要匹配的目标内容")),
    },
    AnalysisAction {
        capability: Capability::Webshell,
        action: ActionId::DetectWebshell,
        input: InputField::Webshell,
        result: PanelId::Webshell,
        empty_message: "请输入代码内容",
        busy_message: "正在检测WebShell...",
        extra: None,
    },
];

impl<B: AnalysisBackend, V: ViewPort> AppController<B, V> {
    /// Shared lifecycle of every analysis request: busy flag and overlay on,
    /// progress 0, call, then the result (progress 100) or the error, and
    /// finally busy flag and overlay off.
    pub async fn execute_analysis<F>(
        &self,
        action: ActionId,
        panel: PanelId,
        busy_message: &str,
        call: F,
    ) -> Option<AnalysisResponse>
    where
        F: Future<Output = Result<AnalysisResponse, ApiError>>,
    {
        self.view.set_button_busy(action, true);
        self.view.show_loading(busy_message);
        self.view.update_progress(0);

        let outcome = match call.await {
            Ok(response) => {
                self.view.show_result(panel, &response.result);
                self.view.update_progress(100);
                Some(response)
            }
            Err(e) => {
                self.view.show_error(panel, &e.display_message());
                None
            }
        };

        self.view.set_button_busy(action, false);
        self.view.hide_loading();
        outcome
    }

    /// Runs one of the single-input capabilities.
    pub async fn run_analysis(&self, capability: Capability) -> Option<AnalysisResponse> {
        let wiring = capability.action();

        let input = self.trimmed_input(wiring.input);
        if input.is_empty() {
            self.view.show_error(wiring.result, wiring.empty_message);
            return None;
        }
        let extra = match wiring.extra {
            Some((field, empty_message)) => {
                let value = self.trimmed_input(field);
                if value.is_empty() {
                    self.view.show_error(wiring.result, empty_message);
                    return None;
                }
                value
            }
            None => String::new(),
        };

        let backend = self.backend.clone();
        let file_name = self
            .view
            .selected_file_names(FilePicker::File)
            .into_iter()
            .next()
            .unwrap_or_default();

        let call = async move {
            match capability {
                Capability::Traffic => {
                    backend
                        .analyze_traffic(AnalyzeTrafficRequest { http_data: input })
                        .await
                }
                Capability::Decode => backend.decode(DecodeRequest { encoded_str: input }).await,
                Capability::JsAudit => backend.audit_js(AuditJsRequest { js_code: input }).await,
                Capability::Process => {
                    backend
                        .analyze_process(AnalyzeProcessRequest { process_data: input })
                        .await
                }
                Capability::Regex => {
                    backend
                        .generate_regex(GenerateRegexRequest {
                            source_text: input,
                            target_text: extra,
                        })
                        .await
                }
                Capability::Webshell => {
                    backend
                        .detect_webshell(DetectWebshellRequest {
                            file_content: input,
                            file_name,
                        })
                        .await
                }
            }
        };

        let response = self
            .execute_analysis(wiring.action, wiring.result, wiring.busy_message, call)
            .await?;
        self.view.show_verdict(wiring.result, response.verdict());
        Some(response)
    }
}
