//! Language codes known to the model registry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ResolveError;

/// Languages a dataset can be classified into
///
/// The derived ordering (`Chinese` before `English`) is the tie-break order
/// used when an arbitrary available model has to be picked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Language {
    /// Chinese (`zh`)
    #[serde(rename = "zh")]
    Chinese,
    /// English (`en`), the default for anything without a Chinese indicator
    #[default]
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// All registered languages, in registry order
    pub const ALL: [Language; 2] = [Language::Chinese, Language::English];

    /// Look up a language by its code
    ///
    /// Only the canonical codes are accepted; anything else is `None` so
    /// callers can decide how to degrade.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "zh" => Some(Language::Chinese),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Chinese => "Chinese",
            Language::English => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| ResolveError::UnsupportedLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("zh"), Some(Language::Chinese));
        assert_eq!(Language::from_code("EN"), Some(Language::English));
        assert_eq!(Language::from_code(" en "), Some(Language::English));
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_code_and_name() {
        assert_eq!(Language::Chinese.code(), "zh");
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Chinese.name(), "Chinese");
        assert_eq!(Language::English.to_string(), "en");
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Chinese);
        match "ja".parse::<Language>() {
            Err(ResolveError::UnsupportedLanguage(code)) => assert_eq!(code, "ja"),
            other => panic!("Expected UnsupportedLanguage, got {other:?}"),
        }
    }

    #[test]
    fn test_ordering_puts_chinese_first() {
        let mut langs = vec![Language::English, Language::Chinese];
        langs.sort();
        assert_eq!(langs, Language::ALL.to_vec());
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Chinese).unwrap();
        assert_eq!(json, "\"zh\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }
}
