use crate::config::ApiInfo;
use serde::{Deserialize, Serialize};

/// Body of `GET /health` (served outside the `/api` prefix).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub config_valid: Option<bool>,
    #[serde(default)]
    pub config_errors: Vec<String>,
    #[serde(default)]
    pub api_info: Option<ApiInfo>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Warning,
    Unhealthy,
}

impl HealthStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "healthy" => HealthStatus::Healthy,
            "warning" => HealthStatus::Warning,
            _ => HealthStatus::Unhealthy,
        }
    }
}

impl HealthResponse {
    pub fn health_status(&self) -> HealthStatus {
        HealthStatus::parse(&self.status)
    }
}
