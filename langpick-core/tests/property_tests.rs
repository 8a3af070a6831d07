//! Property tests for the name classifier

use langpick_core::{Language, LanguageResolver, ModelRegistry, NameClassifier, StaticProbe};
use proptest::prelude::*;

fn cjk_char() -> impl Strategy<Value = char> {
    (0x4E00u32..=0x9FFF).prop_map(|c| char::from_u32(c).unwrap())
}

proptest! {
    #[test]
    fn cjk_character_always_wins(prefix in ".{0,12}", ch in cjk_char(), suffix in ".{0,12}") {
        let name = format!("{prefix}{ch}{suffix}");
        prop_assert_eq!(NameClassifier::new().classify(name.as_str()), Language::Chinese);
    }

    #[test]
    fn cjk_beats_english_keywords(keyword in prop::sample::select(vec!["en", "eng", "english", "novel_eng"]), ch in cjk_char()) {
        let name = format!("{keyword}_{ch}");
        prop_assert_eq!(NameClassifier::new().classify(name.as_str()), Language::Chinese);
    }

    #[test]
    fn keyword_matching_ignores_ascii_case(name in "[a-zA-Z_]{0,24}") {
        let classifier = NameClassifier::new();
        // The novel_eng special case is case-sensitive, but both spellings
        // still contain "en" and land on English.
        prop_assert_eq!(
            classifier.classify(name.to_uppercase().as_str()),
            classifier.classify(name.to_lowercase().as_str())
        );
    }

    #[test]
    fn classification_is_deterministic(name in any::<String>()) {
        let classifier = NameClassifier::new();
        let first = classifier.classify(name.as_str());
        prop_assert_eq!(classifier.classify(name.as_str()), first);
        prop_assert!(matches!(first, Language::Chinese | Language::English));
    }

    #[test]
    fn every_code_maps_to_a_registered_model(code in "[a-z]{0,4}") {
        let registry = ModelRegistry::new();
        let model = registry.map_to_model(&code);
        prop_assert!(registry.language_of(model).is_some());
        if Language::from_code(&code).is_none() {
            prop_assert_eq!(model, "en_core_web_lg");
        }
    }

    #[test]
    fn preferred_model_matches_classification(name in ".{0,24}") {
        let resolver = LanguageResolver::with_probe(StaticProbe::none());
        let language = resolver.classify(name.as_str());
        prop_assert_eq!(
            resolver.model_for_dataset(name.as_str()),
            resolver.registry().model_for(language)
        );
    }
}
