//! Language detection and NLP model selection for named datasets
//!
//! This crate picks an English or Chinese spaCy-style model for a dataset
//! based solely on the dataset's name, and falls back to whatever model is
//! actually installed when the preferred one is missing.
//!
//! # Architecture
//!
//! - **Classifier**: dataset name → [`Language`] via Unicode and keyword heuristics
//! - **Registry**: [`Language`] → model identifier, with an English default
//! - **Resolver**: availability probing and fallback through a [`ModelProbe`]
//!
//! # Example
//!
//! ```rust
//! use langpick_core::{Language, LanguageResolver, StaticProbe};
//!
//! let resolver = LanguageResolver::with_probe(StaticProbe::new(["en_core_web_lg"]));
//!
//! assert_eq!(resolver.classify("mixed_中文_dataset"), Language::Chinese);
//! assert_eq!(resolver.model_for_dataset("anony_chs"), "zh_core_web_lg");
//!
//! // zh_core_web_lg is not installed, so English is used instead
//! assert_eq!(resolver.resolve_fallback("anony_chs").unwrap(), "en_core_web_lg");
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod language;
pub mod probe;
pub mod registry;
pub mod resolver;

pub use classifier::{Detection, DetectionReason, KeywordSets, NameClassifier};
pub use config::{
    model_for_dataset_config, resolve_dataset_config, ConfiguredResolution, DatasetPreference,
    LangpickConfig,
};
pub use error::{ResolveError, Result};
pub use language::Language;
pub use probe::{DirectoryProbe, ModelProbe, ProbeOutcome, StaticProbe, TimeoutProbe};
pub use registry::{ModelRegistry, CHINESE_MODEL, ENGLISH_MODEL};
pub use resolver::{resolve_from, AvailabilityMap, LanguageResolver, Selection};
