//! Configuration file support
//!
//! The TOML schema carries already-resolved preferences from the surrounding
//! system:
//!
//! ```toml
//! [language]
//! auto_detect = true
//! validate_models = true
//!
//! [models]
//! search_paths = ["/opt/spacy-models"]
//! probe_timeout_ms = 3000
//!
//! [datasets.novel]
//! language = "zh"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ResolveError, Result};
use crate::language::Language;
use crate::probe::{DirectoryProbe, ModelProbe, StaticProbe, TimeoutProbe};
use crate::resolver::{resolve_from, LanguageResolver};

/// Default configuration constants
pub mod defaults {
    /// Probe timeout in milliseconds
    pub const PROBE_TIMEOUT_MS: u64 = 3000;

    /// Language used when auto-detection is off and nothing else is set
    pub const LANGUAGE: &str = "en";
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LangpickConfig {
    /// Language selection settings
    #[serde(default)]
    pub language: LanguageSection,

    /// Model discovery settings
    #[serde(default)]
    pub models: ModelsSection,

    /// Per-dataset preferences keyed by dataset name
    #[serde(default)]
    pub datasets: BTreeMap<String, DatasetPreference>,
}

/// Language selection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageSection {
    /// Classify dataset names
    pub auto_detect: bool,

    /// Explicit model, used when auto-detection is off
    pub model: Option<String>,

    /// Language code used when auto-detection is off and no model is set
    pub default_language: Option<String>,

    /// Confirm the chosen model is available, falling back otherwise
    pub validate_models: bool,
}

impl Default for LanguageSection {
    fn default() -> Self {
        Self {
            auto_detect: true,
            model: None,
            default_language: None,
            validate_models: true,
        }
    }
}

/// Model discovery settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsSection {
    /// Directories searched for installed models (empty = `LANGPICK_MODEL_PATH`)
    pub search_paths: Vec<PathBuf>,

    /// Fixed list of available models, replacing directory probing
    pub available: Option<Vec<String>>,

    /// Upper bound on a single probe
    pub probe_timeout_ms: u64,
}

impl Default for ModelsSection {
    fn default() -> Self {
        Self {
            search_paths: Vec::new(),
            available: None,
            probe_timeout_ms: defaults::PROBE_TIMEOUT_MS,
        }
    }
}

/// Preference recorded for one dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetPreference {
    /// Language code
    pub language: Option<String>,
    /// Model identifier, takes precedence over `language`
    pub model: Option<String>,
}

impl LangpickConfig {
    /// Load and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: LangpickConfig =
            toml::from_str(&content).map_err(|e| ResolveError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LangpickConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(model) = &self.language.model {
            if model.trim().is_empty() {
                return Err(ResolveError::InvalidConfig(
                    "language.model must not be empty".into(),
                ));
            }
        }

        if let Some(code) = &self.language.default_language {
            if Language::from_code(code).is_none() {
                return Err(ResolveError::InvalidConfig(format!(
                    "language.default_language: unsupported language '{code}'"
                )));
            }
        }

        if self.models.probe_timeout_ms == 0 {
            return Err(ResolveError::InvalidConfig(
                "models.probe_timeout_ms must be greater than 0".into(),
            ));
        }

        for (name, pref) in &self.datasets {
            if let Some(code) = &pref.language {
                if Language::from_code(code).is_none() {
                    return Err(ResolveError::InvalidConfig(format!(
                        "datasets.{name}.language: unsupported language '{code}'"
                    )));
                }
            }
            if matches!(&pref.model, Some(model) if model.trim().is_empty()) {
                return Err(ResolveError::InvalidConfig(format!(
                    "datasets.{name}.model must not be empty"
                )));
            }
        }

        Ok(())
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.models.probe_timeout_ms)
    }

    /// Probe described by the `[models]` section, bounded by the timeout
    pub fn build_probe(&self) -> Box<dyn ModelProbe> {
        let timeout = self.probe_timeout();
        match &self.models.available {
            Some(ids) => Box::new(TimeoutProbe::new(StaticProbe::new(ids.iter().cloned()), timeout)),
            None if self.models.search_paths.is_empty() => {
                Box::new(TimeoutProbe::new(DirectoryProbe::from_env(), timeout))
            }
            None => Box::new(TimeoutProbe::new(
                DirectoryProbe::new(self.models.search_paths.iter().cloned()),
                timeout,
            )),
        }
    }

    /// Resolver using the default classifier and registry with this config's probe
    pub fn build_resolver(&self) -> LanguageResolver {
        LanguageResolver::new(
            Default::default(),
            Default::default(),
            self.build_probe(),
        )
    }
}

/// Model preferred for a dataset before availability is considered
fn preferred_model(name: &str, config: &LangpickConfig, resolver: &LanguageResolver) -> String {
    if let Some(pref) = config.datasets.get(name) {
        if let Some(model) = &pref.model {
            log::info!("Using configured model '{model}' for dataset '{name}'");
            return model.clone();
        }
        if let Some(code) = &pref.language {
            log::info!("Using configured language '{code}' for dataset '{name}'");
            return resolver.map_to_model(code).to_string();
        }
    }

    if !config.language.auto_detect {
        if let Some(model) = &config.language.model {
            log::info!("Auto-detection disabled, using configured model '{model}'");
            return model.clone();
        }
        let code = config
            .language
            .default_language
            .as_deref()
            .unwrap_or(defaults::LANGUAGE);
        log::info!("Auto-detection disabled, using language '{code}'");
        return resolver.map_to_model(code).to_string();
    }

    resolver.model_for_dataset(name).to_string()
}

/// Outcome of [`resolve_dataset_config`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredResolution {
    /// Language of the preferred model, or of the dataset name when the
    /// preferred model is not registered
    pub language: Language,
    /// Model chosen from configuration and classification alone
    pub preferred: String,
    /// Model to load
    pub model: String,
    /// The availability check replaced `preferred`
    pub fallback: bool,
}

/// Resolve a dataset, honouring configured preferences
///
/// Precedence: dataset model, dataset language, then (with auto-detection
/// off) the configured model or default language, otherwise the classifier.
/// With `validate_models` set, an unavailable choice is replaced through the
/// resolver's fallback order; `NoModelsAvailable` propagates.
pub fn resolve_dataset_config(
    name: &str,
    config: &LangpickConfig,
    resolver: &LanguageResolver,
) -> Result<ConfiguredResolution> {
    let preferred = preferred_model(name, config, resolver);
    let registered = resolver.registry().language_of(&preferred);
    let language = registered.unwrap_or_else(|| resolver.classify(name));
    let mut resolution = ConfiguredResolution {
        language,
        model: preferred.clone(),
        preferred,
        fallback: false,
    };

    if !config.language.validate_models {
        return Ok(resolution);
    }

    // Unregistered models never appear in the availability snapshot
    if registered.is_none() && resolver.is_available(&resolution.preferred) {
        return Ok(resolution);
    }

    let available = resolver.available_models();
    if registered.is_some_and(|lang| available.contains(lang)) {
        return Ok(resolution);
    }

    log::warn!(
        "Preferred model '{}' for dataset '{name}' is not available",
        resolution.preferred
    );
    if available.is_empty() {
        log::error!("No language models available");
        return Err(ResolveError::NoModelsAvailable);
    }

    resolution.model = resolve_from(&available, language)?.to_string();
    resolution.fallback = true;
    Ok(resolution)
}

/// Model identifier picked by [`resolve_dataset_config`]
pub fn model_for_dataset_config(
    name: &str,
    config: &LangpickConfig,
    resolver: &LanguageResolver,
) -> Result<String> {
    resolve_dataset_config(name, config, resolver).map(|resolution| resolution.model)
}
