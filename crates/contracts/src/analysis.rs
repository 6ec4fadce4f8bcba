use serde::{Deserialize, Serialize};

/// `POST /analyze_traffic`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeTrafficRequest {
    pub http_data: String,
}

/// `POST /decode`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecodeRequest {
    pub encoded_str: String,
}

/// `POST /audit_js`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditJsRequest {
    pub js_code: String,
}

/// `POST /analyze_process`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeProcessRequest {
    pub process_data: String,
}

/// `POST /generate_regex`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateRegexRequest {
    pub source_text: String,
    pub target_text: String,
}

/// `POST /detect_webshell`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectWebshellRequest {
    pub file_content: String,
    pub file_name: String,
}

/// `POST /analyze_weblog`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeWeblogRequest {
    pub log_content: String,
    pub analysis_types: Vec<LogAnalysisType>,
}

/// Optional focus areas of a web-log analysis. The backend only accepts these
/// exact labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogAnalysisType {
    #[serde(rename = "攻击检测")]
    Attack,
    #[serde(rename = "异常行为")]
    Anomaly,
    #[serde(rename = "访问统计")]
    Statistics,
    #[serde(rename = "性能分析")]
    Performance,
}

impl LogAnalysisType {
    pub fn all() -> [LogAnalysisType; 4] {
        [
            LogAnalysisType::Attack,
            LogAnalysisType::Anomaly,
            LogAnalysisType::Statistics,
            LogAnalysisType::Performance,
        ]
    }

    /// Wire value, also used as the checkbox label.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogAnalysisType::Attack => "攻击检测",
            LogAnalysisType::Anomaly => "异常行为",
            LogAnalysisType::Statistics => "访问统计",
            LogAnalysisType::Performance => "性能分析",
        }
    }

    /// Whether the option starts out checked.
    pub fn checked_by_default(&self) -> bool {
        matches!(self, LogAnalysisType::Attack | LogAnalysisType::Anomaly)
    }
}

/// Common success body of every analysis capability.
///
/// Only `result` is guaranteed; the flags are set by the traffic and webshell
/// detectors respectively.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResponse {
    pub result: String,
    #[serde(default)]
    pub analysis_type: Option<String>,
    #[serde(default)]
    pub is_attack: Option<bool>,
    #[serde(default)]
    pub is_webshell: Option<bool>,
    #[serde(default)]
    pub threat_level: Option<String>,
}

/// Short classification shown as a badge next to a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Attack,
    Benign,
    Webshell { threat_level: Option<String> },
    Clean,
}

impl Verdict {
    pub fn label(&self) -> String {
        match self {
            Verdict::Attack => "检测到攻击".to_string(),
            Verdict::Benign => "未发现攻击".to_string(),
            Verdict::Webshell {
                threat_level: Some(level),
            } => format!("发现WebShell · {}", level),
            Verdict::Webshell { threat_level: None } => "发现WebShell".to_string(),
            Verdict::Clean => "未发现WebShell".to_string(),
        }
    }

    /// Badge variant name: "error" or "success".
    pub fn severity(&self) -> &'static str {
        match self {
            Verdict::Attack | Verdict::Webshell { .. } => "error",
            Verdict::Benign | Verdict::Clean => "success",
        }
    }
}

impl AnalysisResponse {
    pub fn verdict(&self) -> Option<Verdict> {
        match (self.is_webshell, self.is_attack) {
            (Some(true), _) => Some(Verdict::Webshell {
                threat_level: self
                    .threat_level
                    .clone()
                    .filter(|level| !level.trim().is_empty()),
            }),
            (Some(false), _) => Some(Verdict::Clean),
            (None, Some(true)) => Some(Verdict::Attack),
            (None, Some(false)) => Some(Verdict::Benign),
            (None, None) => None,
        }
    }
}
