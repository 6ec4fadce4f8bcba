//! JSON request client for the analysis backend.
//!
//! Every call goes through [`ApiClient::request`]: the body is parsed whatever
//! the status, non-2xx responses become [`ApiError::Request`] carrying the
//! backend's `error` text, and every failure is logged with the method and
//! endpoint before it is returned.

use async_trait::async_trait;
use contracts::analysis::{
    AnalysisResponse, AnalyzeProcessRequest, AnalyzeTrafficRequest, AnalyzeWeblogRequest,
    AuditJsRequest, DecodeRequest, DetectWebshellRequest, GenerateRegexRequest,
};
use contracts::chat::{ChatWeblogRequest, ChatWeblogResponse};
use contracts::config::{
    ApiInfo, ConfigDocument, GetConfigResponse, ResultMessage, TestConfigRequest,
    TestConfigResponse, ValidateConfigResponse,
};
use contracts::shared::error::ErrorBody;
use contracts::system::health::HealthResponse;
use contracts::translation::TranslateRequest;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::controller::AnalysisBackend;
use crate::shared::api_utils::api_url;
use crate::shared::settings::AppSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Request {
        status: u16,
        message: String,
        code: Option<String>,
        details: Vec<String>,
    },
    /// No usable answer: network failure, unparsable body or unexpected shape.
    #[error("{0}")]
    Transport(String),
}

/// Coarse failure category used to pick a user-facing explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Server,
    Validation,
    LengthLimit,
    Other,
}

impl FailureKind {
    /// Classification by message text, for backends that send no error code.
    pub fn from_message(message: &str) -> Self {
        if message.contains("内部服务器错误") {
            FailureKind::Server
        } else if message.contains("验证") {
            FailureKind::Validation
        } else if message.contains("token") || message.contains("超限") {
            FailureKind::LengthLimit
        } else {
            FailureKind::Other
        }
    }
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        if let ApiError::Request { status, code, .. } = self {
            match code.as_deref() {
                Some("INTERNAL_ERROR") => return FailureKind::Server,
                Some(c) if c.starts_with("VALIDATION") => return FailureKind::Validation,
                _ => {}
            }
            if *status == 413 {
                return FailureKind::LengthLimit;
            }
        }
        FailureKind::from_message(&self.to_string())
    }

    /// Message with the backend's validation details appended, if any.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Request {
                message, details, ..
            } if !details.is_empty() => format!("{}: {}", message, details.join("; ")),
            other => other.to_string(),
        }
    }
}

/// Maps a status and a (possibly unparsable) body onto the call outcome.
pub fn interpret_response(status: u16, body: Result<Value, String>) -> Result<Value, ApiError> {
    if (200..300).contains(&status) {
        return body.map_err(|e| ApiError::Transport(format!("响应解析失败: {}", e)));
    }

    let error_body: ErrorBody = body
        .ok()
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default();
    let details = error_body.validation_errors();
    let message = error_body
        .error
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status));

    Err(ApiError::Request {
        status,
        message,
        code: error_body.error_code,
        details,
    })
}

/// Health replies carry a report even on failure statuses (`500` with
/// `status: unhealthy`), so any body that decodes as one is kept.
pub fn interpret_health(status: u16, body: Result<Value, String>) -> Result<HealthResponse, ApiError> {
    if let Ok(value) = &body {
        if let Ok(health) = serde_json::from_value::<HealthResponse>(value.clone()) {
            if !health.status.is_empty() {
                return Ok(health);
            }
        }
    }
    interpret_response(status, body).and_then(decode)
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Transport(format!("响应格式错误: {}", e)))
}

/// Client bound to one API base. Cheap to clone.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base: String,
    health_path: String,
}

impl ApiClient {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            base: settings.api_base.clone(),
            health_path: settings.health_path.clone(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Sends one request to `{base}/{endpoint}`. `payload` is serialized as the
    /// JSON body of a POST and ignored for GET.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: Option<Value>,
        method: Method,
    ) -> Result<T, ApiError> {
        let url = api_url(&self.base, endpoint);
        let outcome = match send(&url, payload, method).await {
            Ok(value) => decode(value),
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            log::error!("API request failed [{} {}]: {}", method.as_str(), endpoint, e);
        }
        outcome
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let payload = serde_json::to_value(body)
            .map_err(|e| ApiError::Transport(format!("请求序列化失败: {}", e)))?;
        self.request(endpoint, Some(payload), Method::Post).await
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(endpoint, None, Method::Get).await
    }

    /// Checks the health endpoint, which lives outside the API base.
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let outcome = match fetch(&self.health_path, None, Method::Get).await {
            Ok((status, body)) => interpret_health(status, body),
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            log::warn!("health check failed [GET {}]: {}", self.health_path, e);
        }
        outcome
    }
}

async fn send(url: &str, payload: Option<Value>, method: Method) -> Result<Value, ApiError> {
    let (status, body) = fetch(url, payload, method).await?;
    interpret_response(status, body)
}

/// Performs the exchange. Only failures to reach the server are errors here.
async fn fetch(
    url: &str,
    payload: Option<Value>,
    method: Method,
) -> Result<(u16, Result<Value, String>), ApiError> {
    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
    }
    .header("Accept", "application/json");

    let request = match (method, payload) {
        (Method::Post, Some(body)) => builder.json(&body),
        _ => builder.header("Content-Type", "application/json").build(),
    }
    .map_err(|e| ApiError::Transport(format!("请求构建失败: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("网络请求失败: {}", e)))?;

    let status = response.status();
    let body = response.json::<Value>().await.map_err(|e| e.to_string());
    Ok((status, body))
}

#[async_trait(?Send)]
impl AnalysisBackend for ApiClient {
    async fn analyze_traffic(&self, req: AnalyzeTrafficRequest) -> Result<AnalysisResponse, ApiError> {
        self.post("analyze_traffic", &req).await
    }

    async fn decode(&self, req: DecodeRequest) -> Result<AnalysisResponse, ApiError> {
        self.post("decode", &req).await
    }

    async fn audit_js(&self, req: AuditJsRequest) -> Result<AnalysisResponse, ApiError> {
        self.post("audit_js", &req).await
    }

    async fn analyze_process(&self, req: AnalyzeProcessRequest) -> Result<AnalysisResponse, ApiError> {
        self.post("analyze_process", &req).await
    }

    async fn generate_regex(&self, req: GenerateRegexRequest) -> Result<AnalysisResponse, ApiError> {
        self.post("generate_regex", &req).await
    }

    async fn detect_webshell(&self, req: DetectWebshellRequest) -> Result<AnalysisResponse, ApiError> {
        self.post("detect_webshell", &req).await
    }

    async fn analyze_weblog(&self, req: AnalyzeWeblogRequest) -> Result<AnalysisResponse, ApiError> {
        self.post("analyze_weblog", &req).await
    }

    async fn chat_weblog(&self, req: ChatWeblogRequest) -> Result<ChatWeblogResponse, ApiError> {
        self.post("chat_weblog", &req).await
    }

    async fn translate(&self, req: TranslateRequest) -> Result<AnalysisResponse, ApiError> {
        self.post("translate", &req).await
    }

    async fn get_config(&self) -> Result<GetConfigResponse, ApiError> {
        self.get("get_config").await
    }

    async fn save_config(&self, doc: ConfigDocument) -> Result<ResultMessage, ApiError> {
        self.post("save_config", &doc).await
    }

    async fn test_config(&self, req: TestConfigRequest) -> Result<TestConfigResponse, ApiError> {
        self.post("test_config", &req).await
    }

    async fn validate_config(&self) -> Result<ValidateConfigResponse, ApiError> {
        self.get("validate_config").await
    }

    async fn reset_config(&self) -> Result<ResultMessage, ApiError> {
        self.post("reset_config", &serde_json::json!({})).await
    }

    async fn get_api_info(&self) -> Result<ApiInfo, ApiError> {
        self.get("get_api_info").await
    }
}
