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
use contracts::translation::TranslateRequest;

use crate::shared::api_client::ApiError;

/// Capabilities of the analysis backend, one method per endpoint.
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait AnalysisBackend: 'static {
    async fn analyze_traffic(&self, req: AnalyzeTrafficRequest) -> Result<AnalysisResponse, ApiError>;
    async fn decode(&self, req: DecodeRequest) -> Result<AnalysisResponse, ApiError>;
    async fn audit_js(&self, req: AuditJsRequest) -> Result<AnalysisResponse, ApiError>;
    async fn analyze_process(&self, req: AnalyzeProcessRequest) -> Result<AnalysisResponse, ApiError>;
    async fn generate_regex(&self, req: GenerateRegexRequest) -> Result<AnalysisResponse, ApiError>;
    async fn detect_webshell(&self, req: DetectWebshellRequest) -> Result<AnalysisResponse, ApiError>;
    async fn analyze_weblog(&self, req: AnalyzeWeblogRequest) -> Result<AnalysisResponse, ApiError>;
    async fn chat_weblog(&self, req: ChatWeblogRequest) -> Result<ChatWeblogResponse, ApiError>;
    async fn translate(&self, req: TranslateRequest) -> Result<AnalysisResponse, ApiError>;

    async fn get_config(&self) -> Result<GetConfigResponse, ApiError>;
    async fn save_config(&self, doc: ConfigDocument) -> Result<ResultMessage, ApiError>;
    async fn test_config(&self, req: TestConfigRequest) -> Result<TestConfigResponse, ApiError>;
    async fn validate_config(&self) -> Result<ValidateConfigResponse, ApiError>;
    async fn reset_config(&self) -> Result<ResultMessage, ApiError>;
    async fn get_api_info(&self) -> Result<ApiInfo, ApiError>;
}
