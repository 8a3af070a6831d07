//! Static language → model registry

use crate::language::Language;

/// Model used for Chinese datasets
pub const CHINESE_MODEL: &str = "zh_core_web_lg";

/// Model used for English datasets and as the default
pub const ENGLISH_MODEL: &str = "en_core_web_lg";

/// Registry entries in probing order
const ENTRIES: [(Language, &str); 2] = [
    (Language::Chinese, CHINESE_MODEL),
    (Language::English, ENGLISH_MODEL),
];

/// Immutable one-to-one mapping between languages and model identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelRegistry;

impl ModelRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Model identifier registered for a language
    pub fn model_for(&self, language: Language) -> &'static str {
        match language {
            Language::Chinese => CHINESE_MODEL,
            Language::English => ENGLISH_MODEL,
        }
    }

    /// Map a raw language code to a model identifier
    ///
    /// Codes outside the registry log a warning and get the English model.
    pub fn map_to_model(&self, code: &str) -> &'static str {
        match Language::from_code(code) {
            Some(language) => self.model_for(language),
            None => {
                log::warn!("Unsupported language: {code}, defaulting to English model");
                self.model_for(Language::English)
            }
        }
    }

    /// Language a registered model identifier belongs to
    pub fn language_of(&self, model_id: &str) -> Option<Language> {
        ENTRIES
            .iter()
            .find(|(_, id)| *id == model_id)
            .map(|(lang, _)| *lang)
    }

    /// All `(language, model)` pairs in probing order
    pub fn entries(&self) -> impl Iterator<Item = (Language, &'static str)> {
        ENTRIES.into_iter()
    }
}
