use serde::{Deserialize, Serialize};

/// Error body returned by the backend with any non-2xx status.
///
/// Every field is optional: older endpoints only send `error`, some send nothing
/// parseable at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub details: Option<ErrorDetails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorDetails {
    #[serde(default)]
    pub validation_errors: Vec<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl ErrorBody {
    pub fn validation_errors(&self) -> Vec<String> {
        self.details
            .as_ref()
            .map(|d| d.validation_errors.clone())
            .unwrap_or_default()
    }
}
