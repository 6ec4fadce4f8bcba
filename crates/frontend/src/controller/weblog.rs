use contracts::analysis::{AnalysisResponse, AnalyzeWeblogRequest};
use contracts::chat::{ChatContext, ChatRole, ChatWeblogRequest};
use leptos::prelude::*;

use super::{AnalysisBackend, AppController, ViewPort};
use crate::layout::view_manager::{ActionId, InputField, PanelId};
use crate::shared::api_client::{ApiError, FailureKind};

pub const WEBLOG_EMPTY_MESSAGE: &str = "请输入Web日志内容或选择日志文件";
pub const WEBLOG_BUSY_MESSAGE: &str = "正在分析Web日志...";
pub const CHAT_EMPTY_MESSAGE: &str = "请输入您的问题";
pub const CHAT_NO_CONTEXT_MESSAGE: &str = "请先进行日志分析";
pub const THINKING_PLACEHOLDER: &str = "正在思考中...";

const SERVER_FAILURE_TEXT: &str =
    "服务器处理出现问题，可能的原因：\n• AI服务暂时不可用\n• 网络连接问题\n• 请稍后重试或检查网络连接";
const LENGTH_LIMIT_TEXT: &str =
    "文本内容过长，请尝试：\n• 缩短您的问题\n• 分批处理日志内容\n• 联系管理员调整配置";

/// Assistant-side text for a failed chat request.
pub fn describe_chat_failure(err: &ApiError) -> String {
    match err.kind() {
        FailureKind::Server => SERVER_FAILURE_TEXT.to_string(),
        FailureKind::Validation => format!("输入验证失败：{}", err.display_message()),
        FailureKind::LengthLimit => LENGTH_LIMIT_TEXT.to_string(),
        FailureKind::Other => format!("错误：{}", err.display_message()),
    }
}

impl<B: AnalysisBackend, V: ViewPort> AppController<B, V> {
    /// Analyzes the log input. On success the (log, result) pair becomes the
    /// chat context and the chat panel is revealed.
    pub async fn run_weblog_analysis(&self) -> Option<AnalysisResponse> {
        let log_content = self.trimmed_input(InputField::Weblog);
        if log_content.is_empty() {
            self.view.show_error(PanelId::Weblog, WEBLOG_EMPTY_MESSAGE);
            return None;
        }

        let request = AnalyzeWeblogRequest {
            log_content: log_content.clone(),
            analysis_types: self.view.checked_log_types(),
        };
        let backend = self.backend.clone();
        let response = self
            .execute_analysis(
                ActionId::AnalyzeWeblog,
                PanelId::Weblog,
                WEBLOG_BUSY_MESSAGE,
                async move { backend.analyze_weblog(request).await },
            )
            .await?;

        self.chat_context.set(Some(ChatContext {
            log_content,
            analysis_result: response.result.clone(),
        }));
        self.view.reveal_chat();
        log::debug!("chat context updated");
        Some(response)
    }

    /// Asks a follow-up question about the analyzed log. The answer (or a
    /// categorized failure text) replaces the thinking placeholder.
    pub async fn send_chat_message(&self) {
        let question = self.trimmed_input(InputField::ChatQuestion);
        if question.is_empty() {
            self.view.show_error(PanelId::Chat, CHAT_EMPTY_MESSAGE);
            return;
        }
        let Some(context) = self.chat_context.get_untracked() else {
            self.view.show_error(PanelId::Chat, CHAT_NO_CONTEXT_MESSAGE);
            return;
        };

        self.view.clear_panel(PanelId::Chat);
        self.view.add_chat_message(ChatRole::User, &question);
        self.view.set_input_value(InputField::ChatQuestion, String::new());
        let placeholder = self
            .view
            .add_chat_message(ChatRole::Assistant, THINKING_PLACEHOLDER);
        self.view.set_button_busy(ActionId::SendChat, true);

        let reply = match self
            .backend
            .chat_weblog(ChatWeblogRequest::new(question, &context))
            .await
        {
            Ok(response) => response.into_answer(),
            Err(e) => describe_chat_failure(&e),
        };

        self.view.remove_chat_message(placeholder);
        self.view.add_chat_message(ChatRole::Assistant, &reply);
        self.view.set_button_busy(ActionId::SendChat, false);
    }

    pub fn clear_chat(&self) {
        self.view.clear_chat();
        self.view.clear_panel(PanelId::Chat);
    }

    pub fn clear_weblog(&self) {
        self.view.set_input_value(InputField::Weblog, String::new());
        self.view.clear_panel(PanelId::Weblog);
    }
}
