//! AI provider configuration: wire DTOs plus the form model that maps between
//! the editable fields and the provider-keyed document the backend stores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Supported AI providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Deepseek,
    Openrouter,
    Ollama,
}

impl Provider {
    pub fn all() -> [Provider; 3] {
        [Provider::Deepseek, Provider::Openrouter, Provider::Ollama]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Deepseek => "deepseek",
            Provider::Openrouter => "openrouter",
            Provider::Ollama => "ollama",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Deepseek => "DeepSeek",
            Provider::Openrouter => "OpenRouter",
            Provider::Ollama => "Ollama (本地)",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "deepseek" => Some(Provider::Deepseek),
            "openrouter" => Some(Provider::Openrouter),
            "ollama" => Some(Provider::Ollama),
            _ => None,
        }
    }

    /// Editable fields. A local Ollama server takes no credential.
    pub fn fields(&self) -> &'static [ProviderField] {
        match self {
            Provider::Deepseek | Provider::Openrouter => {
                &[ProviderField::Url, ProviderField::Key, ProviderField::Model]
            }
            Provider::Ollama => &[ProviderField::Url, ProviderField::Model],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderField {
    Url,
    Key,
    Model,
}

impl ProviderField {
    /// Key used in the stored configuration and in request bodies.
    pub fn wire_key(&self) -> &'static str {
        match self {
            ProviderField::Url => "api_url",
            ProviderField::Key => "api_key",
            ProviderField::Model => "model",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProviderField::Url => "API地址",
            ProviderField::Key => "API密钥",
            ProviderField::Model => "模型名称",
        }
    }
}

/// One provider's section. Absent fields are omitted from the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ProviderSettings {
    pub fn get(&self, field: ProviderField) -> Option<&str> {
        match field {
            ProviderField::Url => self.api_url.as_deref(),
            ProviderField::Key => self.api_key.as_deref(),
            ProviderField::Model => self.model.as_deref(),
        }
    }

    pub fn set(&mut self, field: ProviderField, value: String) {
        let slot = match field {
            ProviderField::Url => &mut self.api_url,
            ProviderField::Key => &mut self.api_key,
            ProviderField::Model => &mut self.model,
        };
        *slot = Some(value);
    }

    pub fn is_empty(&self) -> bool {
        self.api_url.is_none() && self.api_key.is_none() && self.model.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiSection {
    #[serde(rename = "type")]
    pub api_type: String,
}

/// Body of `POST /save_config`: `{"api": {"type": ..}, "<provider>": {..}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigDocument {
    pub api: ApiSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deepseek: Option<ProviderSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openrouter: Option<ProviderSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ollama: Option<ProviderSettings>,
}

impl ConfigDocument {
    pub fn provider(&self, provider: Provider) -> Option<&ProviderSettings> {
        match provider {
            Provider::Deepseek => self.deepseek.as_ref(),
            Provider::Openrouter => self.openrouter.as_ref(),
            Provider::Ollama => self.ollama.as_ref(),
        }
    }

    fn provider_slot(&mut self, provider: Provider) -> &mut Option<ProviderSettings> {
        match provider {
            Provider::Deepseek => &mut self.deepseek,
            Provider::Openrouter => &mut self.openrouter,
            Provider::Ollama => &mut self.ollama,
        }
    }

    pub fn selected_provider(&self) -> Option<Provider> {
        Provider::parse(&self.api.api_type)
    }
}

/// Stored configuration as returned by `GET /get_config`: section -> key -> value.
/// Credentials arrive masked.
pub type ConfigSections = BTreeMap<String, BTreeMap<String, String>>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GetConfigResponse {
    #[serde(default)]
    pub config: ConfigSections,
}

/// `{"result": "..."}` returned by save and reset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResultMessage {
    #[serde(default)]
    pub result: String,
}

/// Body of `POST /test_config`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestConfigRequest {
    pub api_type: String,
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

impl TestConfigRequest {
    /// Picks the selected provider's section out of a collected document.
    /// Fails when no provider is selected or its section is empty.
    pub fn from_document(doc: &ConfigDocument) -> Result<Self, String> {
        let api_type = doc.api.api_type.trim();
        if api_type.is_empty() {
            return Err("请选择API类型".to_string());
        }
        let settings = Provider::parse(api_type)
            .and_then(|p| doc.provider(p))
            .filter(|s| !s.is_empty())
            .ok_or_else(|| format!("请配置{}的相关参数", api_type))?;

        Ok(Self {
            api_type: api_type.to_string(),
            api_url: settings.api_url.clone().unwrap_or_default(),
            api_key: settings.api_key.clone().unwrap_or_default(),
            model: settings.model.clone().unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TestConfigResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
}

fn default_true() -> bool {
    true
}

impl TestConfigResponse {
    /// Success text or failure text, `result` taking precedence over `message`.
    pub fn into_outcome(self) -> Result<String, String> {
        let text = self
            .result
            .filter(|s| !s.is_empty())
            .or(self.message)
            .unwrap_or_default();
        if self.success {
            Ok(text)
        } else {
            Err(text)
        }
    }
}

/// `GET /validate_config`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValidateConfigResponse {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ValidateConfigResponse {
    pub fn into_outcome(self) -> Result<String, String> {
        if self.valid {
            Ok("配置验证通过".to_string())
        } else {
            Err(format!("配置验证失败: {}", self.errors.join(", ")))
        }
    }
}

/// `GET /get_api_info`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiInfo {
    #[serde(default)]
    pub api_type: String,
    #[serde(default)]
    pub api_url: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub has_api_key: bool,
}

impl ApiInfo {
    pub fn summary(&self) -> String {
        format!(
            "当前API: {}\n地址: {}\n模型: {}\n密钥: {}",
            self.api_type,
            self.api_url,
            self.model,
            if self.has_api_key { "已配置" } else { "未配置" }
        )
    }
}

/// Values of one provider's input group, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderForm {
    pub url: String,
    pub key: String,
    pub model: String,
}

impl ProviderForm {
    pub fn value(&self, field: ProviderField) -> &str {
        match field {
            ProviderField::Url => &self.url,
            ProviderField::Key => &self.key,
            ProviderField::Model => &self.model,
        }
    }

    pub fn value_mut(&mut self, field: ProviderField) -> &mut String {
        match field {
            ProviderField::Url => &mut self.url,
            ProviderField::Key => &mut self.key,
            ProviderField::Model => &mut self.model,
        }
    }
}

/// Snapshot of the whole configuration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigForm {
    pub provider: String,
    pub providers: BTreeMap<Provider, ProviderForm>,
}

impl ConfigForm {
    pub fn provider_form(&self, provider: Provider) -> ProviderForm {
        self.providers.get(&provider).cloned().unwrap_or_default()
    }

    /// Builds the save document. Values are trimmed, blank fields dropped and a
    /// provider with no remaining fields is omitted.
    pub fn collect(&self) -> ConfigDocument {
        let mut doc = ConfigDocument {
            api: ApiSection {
                api_type: self.provider.trim().to_string(),
            },
            ..Default::default()
        };

        for provider in Provider::all() {
            let form = self.provider_form(provider);
            let mut settings = ProviderSettings::default();
            for field in provider.fields() {
                let value = form.value(*field).trim();
                if !value.is_empty() {
                    settings.set(*field, value.to_string());
                }
            }
            if !settings.is_empty() {
                *doc.provider_slot(provider) = Some(settings);
            }
        }

        doc
    }

    /// Overlays stored values onto the form. Fields the backend has no
    /// (non-empty) value for keep what the user typed.
    pub fn apply_sections(&mut self, sections: &ConfigSections) {
        if let Some(api_type) = sections
            .get("api")
            .and_then(|api| api.get("type"))
            .filter(|t| !t.is_empty())
        {
            self.provider = api_type.clone();
        }

        for provider in Provider::all() {
            let Some(section) = sections.get(provider.as_str()) else {
                continue;
            };
            let form = self.providers.entry(provider).or_default();
            for field in provider.fields() {
                if let Some(value) = section.get(field.wire_key()).filter(|v| !v.is_empty()) {
                    *form.value_mut(*field) = value.clone();
                }
            }
        }
    }
}
