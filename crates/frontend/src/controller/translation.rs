use contracts::analysis::AnalysisResponse;
use contracts::translation::{SourceLanguage, TranslateRequest, DEFAULT_TARGET_LANGUAGE};

use super::{AnalysisBackend, AppController, ViewPort};
use crate::layout::view_manager::{ActionId, InputField, PanelId};

pub const TRANSLATE_EMPTY_MESSAGE: &str = "请输入需要翻译的文本";
pub const TRANSLATE_BUSY_MESSAGE: &str = "正在翻译中...";

impl<B: AnalysisBackend, V: ViewPort> AppController<B, V> {
    /// Translates the input into the selected language. The source language is
    /// guessed from the text itself.
    pub async fn run_translation(&self) -> Option<AnalysisResponse> {
        let text = self.trimmed_input(InputField::TranslateText);
        if text.is_empty() {
            self.view.show_error(PanelId::Translate, TRANSLATE_EMPTY_MESSAGE);
            return None;
        }

        let mut target_lang = self.trimmed_input(InputField::TargetLanguage);
        if target_lang.is_empty() {
            target_lang = DEFAULT_TARGET_LANGUAGE.to_string();
        }
        let request = TranslateRequest {
            source_lang: SourceLanguage::detect(&text).code().to_string(),
            text,
            target_lang,
        };

        let backend = self.backend.clone();
        self.execute_analysis(
            ActionId::Translate,
            PanelId::Translate,
            TRANSLATE_BUSY_MESSAGE,
            async move { backend.translate(request).await },
        )
        .await
    }

    pub fn clear_translation(&self) {
        self.view.set_input_value(InputField::TranslateText, String::new());
        self.view.clear_panel(PanelId::Translate);
    }
}
