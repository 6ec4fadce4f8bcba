use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }

    /// Label rendered above the message body.
    pub fn label(&self) -> &'static str {
        match self {
            ChatRole::User => "您",
            ChatRole::Assistant => "AI助手",
        }
    }
}

/// One entry of the web-log chat transcript. Lives only for the page session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
        }
    }
}

/// The (log, analysis) pair a follow-up question is answered against.
/// Replaced wholesale by every successful analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatContext {
    pub log_content: String,
    pub analysis_result: String,
}

/// `POST /chat_weblog`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatWeblogRequest {
    pub question: String,
    pub log_content: String,
    pub analysis_result: String,
}

impl ChatWeblogRequest {
    pub fn new(question: impl Into<String>, context: &ChatContext) -> Self {
        Self {
            question: question.into(),
            log_content: context.log_content.clone(),
            analysis_result: context.analysis_result.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChatWeblogResponse {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

pub const NO_ANSWER_FALLBACK: &str = "抱歉，无法获取回复";

impl ChatWeblogResponse {
    /// `result`, then `answer`, then a fixed apology.
    pub fn into_answer(self) -> String {
        self.result
            .filter(|s| !s.is_empty())
            .or(self.answer.filter(|s| !s.is_empty()))
            .unwrap_or_else(|| NO_ANSWER_FALLBACK.to_string())
    }
}
