//! Language resolver: classification, model mapping and availability fallback

use std::collections::BTreeMap;
use std::fmt;

use crate::classifier::{Detection, NameClassifier};
use crate::error::{ResolveError, Result};
use crate::language::Language;
use crate::probe::{DirectoryProbe, ModelProbe, TimeoutProbe};
use crate::registry::ModelRegistry;

/// Snapshot of the registry pairs that passed the availability probe
///
/// Iteration follows [`Language`] ordering, which is also the tie-break used
/// by [`AvailabilityMap::select`] when an arbitrary model must be picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityMap {
    models: BTreeMap<Language, &'static str>,
}

/// How [`AvailabilityMap::select`] arrived at a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The preferred language's model is available
    Preferred(&'static str),
    /// Preferred model missing, English is available
    EnglishFallback(&'static str),
    /// Neither preferred nor English available, first remaining entry
    Arbitrary(&'static str),
}

impl Selection {
    pub fn model(&self) -> &'static str {
        match *self {
            Selection::Preferred(model)
            | Selection::EnglishFallback(model)
            | Selection::Arbitrary(model) => model,
        }
    }
}

impl AvailabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, language: Language, model_id: &'static str) {
        self.models.insert(language, model_id);
    }

    pub fn get(&self, language: Language) -> Option<&'static str> {
        self.models.get(&language).copied()
    }

    pub fn contains(&self, language: Language) -> bool {
        self.models.contains_key(&language)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &'static str)> + '_ {
        self.models.iter().map(|(lang, model)| (*lang, *model))
    }

    /// Pick a model for `preferred`, falling back to English, then to the
    /// first entry. Returns `None` only for an empty map.
    pub fn select(&self, preferred: Language) -> Option<Selection> {
        if let Some(model) = self.get(preferred) {
            return Some(Selection::Preferred(model));
        }
        if let Some(model) = self.get(Language::English) {
            return Some(Selection::EnglishFallback(model));
        }
        self.models.values().next().copied().map(Selection::Arbitrary)
    }
}

impl FromIterator<(Language, &'static str)> for AvailabilityMap {
    fn from_iter<I: IntoIterator<Item = (Language, &'static str)>>(iter: I) -> Self {
        Self {
            models: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for AvailabilityMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (lang, model)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{lang}: {model}")?;
        }
        write!(f, "}}")
    }
}

/// Picks a model identifier for a dataset name
///
/// Holds no mutable state. Every availability query probes afresh, so a
/// model installed or removed between calls is picked up.
pub struct LanguageResolver {
    classifier: NameClassifier,
    registry: ModelRegistry,
    probe: Box<dyn ModelProbe>,
}

impl fmt::Debug for LanguageResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageResolver")
            .field("classifier", &self.classifier)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl Default for LanguageResolver {
    /// Default classifier and registry, probing `LANGPICK_MODEL_PATH` with
    /// the default timeout
    fn default() -> Self {
        Self::with_probe(TimeoutProbe::with_default_timeout(DirectoryProbe::from_env()))
    }
}

impl LanguageResolver {
    pub fn new(
        classifier: NameClassifier,
        registry: ModelRegistry,
        probe: Box<dyn ModelProbe>,
    ) -> Self {
        Self {
            classifier,
            registry,
            probe,
        }
    }

    /// Default classifier and registry with the given probe
    pub fn with_probe(probe: impl ModelProbe + 'static) -> Self {
        Self::new(NameClassifier::new(), ModelRegistry::new(), Box::new(probe))
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn classify<'a>(&self, name: impl Into<Option<&'a str>>) -> Language {
        self.classifier.classify(name)
    }

    pub fn detect<'a>(&self, name: impl Into<Option<&'a str>>) -> Detection {
        self.classifier.detect(name)
    }

    pub fn map_to_model(&self, code: &str) -> &'static str {
        self.registry.map_to_model(code)
    }

    /// Preferred model for a dataset, without consulting availability
    pub fn model_for_dataset<'a>(&self, name: impl Into<Option<&'a str>>) -> &'static str {
        let name = name.into();
        let language = self.classifier.classify(name);
        let model = self.registry.model_for(language);
        log::info!(
            "Selected model '{model}' for dataset '{}' (language: {language})",
            name.unwrap_or_default()
        );
        model
    }

    pub fn is_available(&self, model_id: &str) -> bool {
        self.probe.is_available(model_id)
    }

    /// Probe every registry entry and collect the usable ones
    pub fn available_models(&self) -> AvailabilityMap {
        let available: AvailabilityMap = self
            .registry
            .entries()
            .filter(|(_, model)| self.probe.is_available(model))
            .collect();
        log::info!("Available models: {available}");
        available
    }

    /// Pick a usable model for a dataset
    ///
    /// Fails with [`ResolveError::NoModelsAvailable`] when no registered
    /// model passes the probe.
    pub fn resolve_fallback<'a>(&self, name: impl Into<Option<&'a str>>) -> Result<&'static str> {
        let available = self.available_models();
        if available.is_empty() {
            log::error!("No language models available");
            return Err(ResolveError::NoModelsAvailable);
        }

        let language = self.classifier.classify(name);
        resolve_from(&available, language)
    }
}

/// Selection step of [`LanguageResolver::resolve_fallback`] over a given map
pub fn resolve_from(available: &AvailabilityMap, language: Language) -> Result<&'static str> {
    match available.select(language) {
        Some(Selection::Preferred(model)) => {
            log::info!("Using model '{model}' for language '{language}'");
            Ok(model)
        }
        Some(Selection::EnglishFallback(model)) => {
            log::warn!(
                "Model for language '{language}' not available, falling back to English"
            );
            Ok(model)
        }
        Some(Selection::Arbitrary(model)) => {
            log::warn!("English model not available, using fallback: {model}");
            Ok(model)
        }
        None => {
            log::error!("No language models available");
            Err(ResolveError::NoModelsAvailable)
        }
    }
}
