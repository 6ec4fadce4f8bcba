use contracts::config::{ConfigForm, ConfigSections, Provider, ProviderField, ProviderForm};
use leptos::prelude::*;

/// Provider selected before anything is loaded.
pub const DEFAULT_PROVIDER: Provider = Provider::Openrouter;

/// Input signals of one provider group.
#[derive(Clone, Copy)]
pub struct ProviderFieldsVm {
    pub url: RwSignal<String>,
    pub key: RwSignal<String>,
    pub model: RwSignal<String>,
}

impl ProviderFieldsVm {
    fn new() -> Self {
        Self {
            url: RwSignal::new(String::new()),
            key: RwSignal::new(String::new()),
            model: RwSignal::new(String::new()),
        }
    }

    pub fn field(&self, field: ProviderField) -> RwSignal<String> {
        match field {
            ProviderField::Url => self.url,
            ProviderField::Key => self.key,
            ProviderField::Model => self.model,
        }
    }

    fn snapshot(&self) -> ProviderForm {
        ProviderForm {
            url: self.url.get_untracked(),
            key: self.key.get_untracked(),
            model: self.model.get_untracked(),
        }
    }

    fn fill(&self, form: &ProviderForm) {
        self.url.set(form.url.clone());
        self.key.set(form.key.clone());
        self.model.set(form.model.clone());
    }
}

/// Reactive counterpart of [`ConfigForm`].
#[derive(Clone, Copy)]
pub struct ConfigFormVm {
    pub provider: RwSignal<String>,
    deepseek: ProviderFieldsVm,
    openrouter: ProviderFieldsVm,
    ollama: ProviderFieldsVm,
}

impl Default for ConfigFormVm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigFormVm {
    pub fn new() -> Self {
        Self {
            provider: RwSignal::new(DEFAULT_PROVIDER.as_str().to_string()),
            deepseek: ProviderFieldsVm::new(),
            openrouter: ProviderFieldsVm::new(),
            ollama: ProviderFieldsVm::new(),
        }
    }

    pub fn provider_fields(&self, provider: Provider) -> ProviderFieldsVm {
        match provider {
            Provider::Deepseek => self.deepseek,
            Provider::Openrouter => self.openrouter,
            Provider::Ollama => self.ollama,
        }
    }

    /// Provider whose panel is shown.
    pub fn selected_provider(&self) -> Option<Provider> {
        self.provider.with(|p| Provider::parse(p))
    }

    pub fn snapshot(&self) -> ConfigForm {
        ConfigForm {
            provider: self.provider.get_untracked(),
            providers: Provider::all()
                .into_iter()
                .map(|p| (p, self.provider_fields(p).snapshot()))
                .collect(),
        }
    }

    pub fn fill(&self, form: &ConfigForm) {
        self.provider.set(form.provider.clone());
        for provider in Provider::all() {
            self.provider_fields(provider)
                .fill(&form.provider_form(provider));
        }
    }

    pub fn apply_sections(&self, sections: &ConfigSections) {
        let mut form = self.snapshot();
        form.apply_sections(sections);
        self.fill(&form);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_inputs() {
        let vm = ConfigFormVm::new();
        vm.provider.set("deepseek".into());
        vm.provider_fields(Provider::Deepseek).key.set("sk-1".into());

        let form = vm.snapshot();
        assert_eq!(form.provider, "deepseek");
        assert_eq!(form.provider_form(Provider::Deepseek).key, "sk-1");
        assert_eq!(vm.selected_provider(), Some(Provider::Deepseek));
    }

    #[test]
    fn test_apply_sections_fills_signals() {
        let vm = ConfigFormVm::new();
        let mut sections = ConfigSections::new();
        sections.insert(
            "api".into(),
            [("type".to_string(), "ollama".to_string())].into_iter().collect(),
        );
        sections.insert(
            "ollama".into(),
            [("model".to_string(), "qwen2.5-coder:14b".to_string())]
                .into_iter()
                .collect(),
        );
        vm.apply_sections(&sections);

        assert_eq!(vm.provider.get_untracked(), "ollama");
        assert_eq!(
            vm.provider_fields(Provider::Ollama).model.get_untracked(),
            "qwen2.5-coder:14b"
        );
    }
}
