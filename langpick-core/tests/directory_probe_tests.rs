//! Resolver behaviour over installed model directories

use langpick_core::{
    DirectoryProbe, LangpickConfig, LanguageResolver, ResolveError, TimeoutProbe, CHINESE_MODEL,
    ENGLISH_MODEL,
};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

fn install(root: &Path, lang: &str, name: &str) {
    let dir = root.join(format!("{lang}_{name}"));
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("meta.json"),
        format!(r#"{{"lang": "{lang}", "name": "{name}", "version": "3.7.0"}}"#),
    )
    .unwrap();
}

fn resolver_for(root: &Path) -> LanguageResolver {
    LanguageResolver::with_probe(TimeoutProbe::new(
        DirectoryProbe::new([root]),
        Duration::from_secs(5),
    ))
}

#[test]
fn test_resolves_installed_models() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "zh", "core_web_lg");
    install(temp.path(), "en", "core_web_lg");

    let resolver = resolver_for(temp.path());
    assert_eq!(resolver.available_models().len(), 2);
    assert_eq!(resolver.resolve_fallback("anony_chs").unwrap(), CHINESE_MODEL);
}

#[test]
fn test_snapshot_tracks_environment_changes() {
    let temp = TempDir::new().unwrap();
    let resolver = resolver_for(temp.path());

    assert!(matches!(
        resolver.resolve_fallback("demo"),
        Err(ResolveError::NoModelsAvailable)
    ));

    install(temp.path(), "en", "core_web_lg");
    assert_eq!(resolver.resolve_fallback("novel").unwrap(), ENGLISH_MODEL);

    install(temp.path(), "zh", "core_web_lg");
    assert_eq!(resolver.resolve_fallback("novel").unwrap(), CHINESE_MODEL);

    fs::remove_dir_all(temp.path().join(CHINESE_MODEL)).unwrap();
    assert_eq!(resolver.resolve_fallback("novel").unwrap(), ENGLISH_MODEL);
}

#[test]
fn test_corrupt_model_is_skipped() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "en", "core_web_lg");
    let zh = temp.path().join(CHINESE_MODEL);
    fs::create_dir_all(&zh).unwrap();
    fs::write(zh.join("meta.json"), "corrupted").unwrap();

    let resolver = resolver_for(temp.path());
    assert!(!resolver.is_available(CHINESE_MODEL));
    assert_eq!(resolver.resolve_fallback("中文数据集").unwrap(), ENGLISH_MODEL);
}

#[test]
fn test_config_search_paths() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "zh", "core_web_lg");

    let toml = format!(
        "[models]\nsearch_paths = [{:?}]\nprobe_timeout_ms = 2000\n",
        temp.path().display().to_string()
    );
    let config = LangpickConfig::from_toml_str(&toml).unwrap();
    let resolver = config.build_resolver();

    assert_eq!(resolver.resolve_fallback("demo").unwrap(), CHINESE_MODEL);
}
