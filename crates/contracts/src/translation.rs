use serde::{Deserialize, Serialize};

/// `POST /translate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// Languages offered in the target selector: (code, label).
pub const TARGET_LANGUAGES: [(&str, &str); 8] = [
    ("en", "英语"),
    ("zh", "中文"),
    ("ja", "日语"),
    ("ko", "韩语"),
    ("fr", "法语"),
    ("de", "德语"),
    ("ru", "俄语"),
    ("es", "西班牙语"),
];

pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Source language guessed from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage {
    Chinese,
    English,
}

impl SourceLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            SourceLanguage::Chinese => "zh",
            SourceLanguage::English => "en",
        }
    }

    /// Any CJK Unified Ideograph (U+4E00..=U+9FFF) makes the text Chinese.
    pub fn detect(text: &str) -> Self {
        if text.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c)) {
            SourceLanguage::Chinese
        } else {
            SourceLanguage::English
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_chinese() {
        assert_eq!(SourceLanguage::detect("你好"), SourceLanguage::Chinese);
        assert_eq!(SourceLanguage::detect("error: 文件不存在"), SourceLanguage::Chinese);
    }

    #[test]
    fn test_detect_english() {
        assert_eq!(SourceLanguage::detect("hello"), SourceLanguage::English);
        assert_eq!(SourceLanguage::detect(""), SourceLanguage::English);
        // Hiragana and Hangul sit outside the ideograph block
        assert_eq!(SourceLanguage::detect("こんにちは"), SourceLanguage::English);
        assert_eq!(SourceLanguage::detect("안녕"), SourceLanguage::English);
    }

    #[test]
    fn test_codes() {
        assert_eq!(SourceLanguage::detect("你好").code(), "zh");
        assert_eq!(SourceLanguage::detect("hello").code(), "en");
    }
}
