//! Identifiers of the tabs, buttons, panels, inputs and pickers the view
//! manager tracks. `as_str` values double as DOM ids.

use serde::{Deserialize, Serialize};

/// Navigation targets. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabId {
    #[default]
    TrafficAnalysis,
    Decode,
    JsAudit,
    ProcessAnalysis,
    RegexGenerator,
    WebshellDetection,
    WeblogAnalysis,
    Translation,
    Config,
}

impl TabId {
    pub fn all() -> [TabId; 9] {
        [
            TabId::TrafficAnalysis,
            TabId::Decode,
            TabId::JsAudit,
            TabId::ProcessAnalysis,
            TabId::RegexGenerator,
            TabId::WebshellDetection,
            TabId::WeblogAnalysis,
            TabId::Translation,
            TabId::Config,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::TrafficAnalysis => "traffic-analysis",
            TabId::Decode => "decode",
            TabId::JsAudit => "js-audit",
            TabId::ProcessAnalysis => "process-analysis",
            TabId::RegexGenerator => "regex-generator",
            TabId::WebshellDetection => "webshell-detection",
            TabId::WeblogAnalysis => "weblog-analysis",
            TabId::Translation => "translation",
            TabId::Config => "config",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        TabId::all().into_iter().find(|tab| tab.as_str() == s)
    }

    pub fn title(&self) -> &'static str {
        match self {
            TabId::TrafficAnalysis => "流量分析",
            TabId::Decode => "字符串解码",
            TabId::JsAudit => "JS代码审计",
            TabId::ProcessAnalysis => "进程分析",
            TabId::RegexGenerator => "正则生成",
            TabId::WebshellDetection => "WebShell检测",
            TabId::WeblogAnalysis => "Web日志分析",
            TabId::Translation => "翻译",
            TabId::Config => "系统配置",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TabId::TrafficAnalysis => "network",
            TabId::Decode => "code",
            TabId::JsAudit => "file-code",
            TabId::ProcessAnalysis => "terminal",
            TabId::RegexGenerator => "regex",
            TabId::WebshellDetection => "shield",
            TabId::WeblogAnalysis => "file-text",
            TabId::Translation => "languages",
            TabId::Config => "settings",
        }
    }
}

/// Buttons that carry a busy state while their request is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionId {
    AnalyzeTraffic,
    Decode,
    AuditJs,
    AnalyzeProcess,
    GenerateRegex,
    DetectWebshell,
    AnalyzeWeblog,
    SendChat,
    Translate,
    LoadConfig,
    SaveConfig,
    TestConfig,
    ValidateConfig,
    ResetConfig,
    ApiInfo,
}

impl ActionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionId::AnalyzeTraffic => "analyze-btn",
            ActionId::Decode => "decode-btn",
            ActionId::AuditJs => "js-audit-btn",
            ActionId::AnalyzeProcess => "process-btn",
            ActionId::GenerateRegex => "regex-btn",
            ActionId::DetectWebshell => "webshell-btn",
            ActionId::AnalyzeWeblog => "weblog-analyze-btn",
            ActionId::SendChat => "weblog-chat-send",
            ActionId::Translate => "translate-btn",
            ActionId::LoadConfig => "load-config-btn",
            ActionId::SaveConfig => "save-config-btn",
            ActionId::TestConfig => "test-config-btn",
            ActionId::ValidateConfig => "validate-config-btn",
            ActionId::ResetConfig => "reset-config-btn",
            ActionId::ApiInfo => "api-info-btn",
        }
    }
}

/// Result areas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelId {
    Traffic,
    Decode,
    JsAudit,
    Process,
    Regex,
    Webshell,
    Weblog,
    Chat,
    Translate,
    Config,
}

impl PanelId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelId::Traffic => "traffic-result",
            PanelId::Decode => "decode-result",
            PanelId::JsAudit => "js-result",
            PanelId::Process => "process-result",
            PanelId::Regex => "regex-result",
            PanelId::Webshell => "webshell-result",
            PanelId::Weblog => "weblog-result",
            PanelId::Chat => "weblog-chat-result",
            PanelId::Translate => "translate-result",
            PanelId::Config => "config-result",
        }
    }
}

/// Free-text inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputField {
    Traffic,
    Decode,
    JsCode,
    Process,
    RegexSource,
    RegexTarget,
    Webshell,
    Weblog,
    ChatQuestion,
    TranslateText,
    TargetLanguage,
}

impl InputField {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::Traffic => "traffic-input",
            InputField::Decode => "decode-input",
            InputField::JsCode => "js-input",
            InputField::Process => "process-input",
            InputField::RegexSource => "regex-input",
            InputField::RegexTarget => "regex-target",
            InputField::Webshell => "webshell-input",
            InputField::Weblog => "weblog-input",
            InputField::ChatQuestion => "weblog-chat-input",
            InputField::TranslateText => "translation-input",
            InputField::TargetLanguage => "target-language",
        }
    }
}

/// Hidden file inputs opened by trigger buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilePicker {
    File,
    Directory,
    LogFile,
}

impl FilePicker {
    pub fn all() -> [FilePicker; 3] {
        [FilePicker::File, FilePicker::Directory, FilePicker::LogFile]
    }

    /// Id of the trigger button.
    pub fn button_id(&self) -> &'static str {
        match self {
            FilePicker::File => "choose-file",
            FilePicker::Directory => "choose-dir",
            FilePicker::LogFile => "choose-log-file",
        }
    }

    pub fn accept(&self) -> Option<&'static str> {
        match self {
            FilePicker::LogFile => Some(".log,.txt,.access,.error"),
            _ => None,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, FilePicker::Directory)
    }

    pub fn idle_label(&self) -> &'static str {
        match self {
            FilePicker::File => "选择文件",
            FilePicker::Directory => "选择目录",
            FilePicker::LogFile => "选择日志文件",
        }
    }
}
