//! Dataset-name language classifier
//!
//! Classification looks only at the dataset's name. Rules are checked in a
//! fixed priority order and the first one that fires decides:
//!
//! 1. any CJK Unified Ideograph (U+4E00..=U+9FFF) anywhere in the name → `zh`
//! 2. an exact English special-case name (`novel_eng`) → `en`
//! 3. an English keyword as a case-insensitive substring → `en`
//! 4. a Chinese keyword as a case-insensitive substring → `zh`
//! 5. otherwise → `en`
//!
//! Substring matching has no word boundaries, so `"ancndataset"` contains
//! `cn` and is Chinese.

use std::fmt;

use crate::language::Language;

/// English keywords, checked before the Chinese ones
pub const ENGLISH_KEYWORDS: &[&str] = &["en", "eng", "english", "英文", "英语"];

/// Chinese keywords; `novel` is deliberately part of this list
pub const CHINESE_KEYWORDS: &[&str] = &["chinese", "zh", "chs", "cn", "novel", "中文", "汉语", "华语"];

/// Names that are English regardless of any keyword they contain
pub const ENGLISH_SPECIAL_CASES: &[&str] = &["novel_eng"];

/// Exact names never allowed to match through the English keyword scan
// No current English keyword is a substring of "novel", so this has no
// observable effect with the default tables.
pub const ENGLISH_KEYWORD_EXCLUSIONS: &[&str] = &["novel"];

/// Immutable keyword tables consulted by [`NameClassifier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSets {
    pub english: &'static [&'static str],
    pub chinese: &'static [&'static str],
    pub english_special_cases: &'static [&'static str],
    pub english_exclusions: &'static [&'static str],
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self {
            english: ENGLISH_KEYWORDS,
            chinese: CHINESE_KEYWORDS,
            english_special_cases: ENGLISH_SPECIAL_CASES,
            english_exclusions: ENGLISH_KEYWORD_EXCLUSIONS,
        }
    }
}

/// Which rule produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionReason {
    /// Empty or missing name
    EmptyName,
    /// The name contains this CJK ideograph
    CjkCharacter(char),
    /// The name is one of the English special cases
    SpecialCase,
    /// This English keyword occurs in the name
    EnglishKeyword(&'static str),
    /// This Chinese keyword occurs in the name
    ChineseKeyword(&'static str),
    /// Nothing matched
    NoIndicator,
}

impl fmt::Display for DetectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionReason::EmptyName => write!(f, "empty dataset name"),
            DetectionReason::CjkCharacter(ch) => write!(f, "Chinese character '{ch}'"),
            DetectionReason::SpecialCase => write!(f, "special-case English dataset"),
            DetectionReason::EnglishKeyword(kw) => write!(f, "English keyword '{kw}'"),
            DetectionReason::ChineseKeyword(kw) => write!(f, "Chinese keyword '{kw}'"),
            DetectionReason::NoIndicator => write!(f, "no language indicators"),
        }
    }
}

/// Classification result together with the rule that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub language: Language,
    pub reason: DetectionReason,
}

/// Returns true for characters in the CJK Unified Ideographs block
pub fn is_cjk_ideograph(ch: char) -> bool {
    matches!(ch, '\u{4E00}'..='\u{9FFF}')
}

/// Maps dataset names to a [`Language`]
#[derive(Debug, Clone, Default)]
pub struct NameClassifier {
    keywords: KeywordSets,
}

impl NameClassifier {
    /// Create a classifier with the default keyword tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with custom keyword tables
    pub fn with_keywords(keywords: KeywordSets) -> Self {
        Self { keywords }
    }

    /// Classify a dataset name, returning `zh` or `en`
    ///
    /// Accepts a `&str` or an `Option<&str>`; `None` and `""` are English.
    pub fn classify<'a>(&self, name: impl Into<Option<&'a str>>) -> Language {
        self.detect(name).language
    }

    /// Classify a dataset name and report which rule decided
    pub fn detect<'a>(&self, name: impl Into<Option<&'a str>>) -> Detection {
        let name = match name.into() {
            Some(name) if !name.is_empty() => name,
            _ => {
                log::warn!("Empty dataset name, defaulting to English");
                return Detection {
                    language: Language::English,
                    reason: DetectionReason::EmptyName,
                };
            }
        };

        if let Some(ch) = name.chars().find(|&c| is_cjk_ideograph(c)) {
            log::info!("Detected Chinese characters in dataset name: {name}");
            return Detection {
                language: Language::Chinese,
                reason: DetectionReason::CjkCharacter(ch),
            };
        }

        if self.keywords.english_special_cases.iter().any(|s| *s == name) {
            log::info!("Detected special case English dataset: {name}");
            return Detection {
                language: Language::English,
                reason: DetectionReason::SpecialCase,
            };
        }

        let lowered = name.to_lowercase();

        if !self.keywords.english_exclusions.iter().any(|s| *s == name) {
            if let Some(kw) = find_keyword(&lowered, self.keywords.english) {
                log::info!("Detected English keyword '{kw}' in dataset name: {name}");
                return Detection {
                    language: Language::English,
                    reason: DetectionReason::EnglishKeyword(kw),
                };
            }
        }

        if let Some(kw) = find_keyword(&lowered, self.keywords.chinese) {
            log::info!("Detected Chinese keyword '{kw}' in dataset name: {name}");
            return Detection {
                language: Language::Chinese,
                reason: DetectionReason::ChineseKeyword(kw),
            };
        }

        log::info!("No language indicators found in dataset name: {name}, defaulting to English");
        Detection {
            language: Language::English,
            reason: DetectionReason::NoIndicator,
        }
    }
}

fn find_keyword(lowered: &str, keywords: &'static [&'static str]) -> Option<&'static str> {
    keywords.iter().copied().find(|kw| lowered.contains(kw))
}
