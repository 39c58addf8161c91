//! Configuration integration tests.

use std::fs;

use brrr_bigo::config::CONFIG_FILE_NAME;
use brrr_bigo::{AnalyzerConfig, BigOError, ComplexityAnalyzer, ComplexityClass};
use tempfile::TempDir;

#[test]
fn test_discovered_profile_changes_classification() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"{"profile": {"sort_calls": ["order_by"]}}"#,
    )
    .unwrap();
    let file = dir.path().join("query.py");
    let source = "rows = order_by(table)\nrows2 = sorted(table)";
    fs::write(&file, source).unwrap();

    let (config, _) = AnalyzerConfig::find_and_load(&file).unwrap().unwrap();
    let analyzer = ComplexityAnalyzer::new(&config).unwrap();
    let scan = analyzer.scanner().scan(source);
    assert!(scan.uses_sort);

    // Without `sorted` in the profile only `order_by` triggers the rule.
    let only_sorted = analyzer.scanner().scan("rows2 = sorted(table)");
    assert!(!only_sorted.uses_sort);
    assert_eq!(
        analyzer.classify(source).complexity_class,
        ComplexityClass::Linearithmic
    );
}

#[test]
fn test_tab_width_from_config() {
    let config = AnalyzerConfig::from_json(r#"{"profile": {"tab_width": 2}}"#).unwrap();
    let analyzer = ComplexityAnalyzer::new(&config).unwrap();
    assert_eq!(analyzer.scanner().profile().tab_width, 2);
}

#[test]
fn test_invalid_config_is_rejected_up_front() {
    let config = AnalyzerConfig {
        profile: brrr_bigo::LexicalProfile {
            membership_keywords: vec!["not an identifier".to_string()],
            ..Default::default()
        },
    };
    assert!(matches!(
        ComplexityAnalyzer::new(&config),
        Err(BigOError::Config(_))
    ));
}

#[test]
fn test_no_config_found() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a");
    fs::create_dir_all(&nested).unwrap();
    // A tempdir under the system temp root normally has no .bigo.json above it.
    let found = AnalyzerConfig::find_and_load(&nested).unwrap();
    if let Some((_, path)) = found {
        assert!(!path.starts_with(dir.path()));
    }
}
