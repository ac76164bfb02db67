use crate::conf::ConfigError;
use crate::conf::types::{CompressAction, CompressPrefixConfig};
use crate::field::PrefixCompressor;
use pretty_assertions::assert_eq;

fn compressor(action: CompressAction) -> PrefixCompressor {
    PrefixCompressor::new(vec![".".to_string()], Vec::new(), action, false)
}

#[test]
fn remove_keeps_the_last_segment() {
    // Arrange
    let compressor = compressor(CompressAction::Remove);

    // Act
    let out = compressor.compress("org.example.app");

    // Assert
    assert_eq!(out, "app");
}

#[test]
fn remove_non_first_letter_abbreviates_leading_segments() {
    let compressor = compressor(CompressAction::RemoveNonFirstLetter);

    assert_eq!(compressor.compress("org.example.app"), "o.e.app");
}

#[test]
fn text_without_separator_is_unchanged() {
    let compressor = compressor(CompressAction::Remove);

    assert_eq!(compressor.compress("main"), "main");
}

#[test]
fn white_listed_prefix_is_unchanged() {
    let compressor = PrefixCompressor::new(
        vec![".".to_string()],
        vec!["com.acme".to_string()],
        CompressAction::Remove,
        false,
    );

    assert_eq!(compressor.compress("com.acme.billing.Job"), "com.acme.billing.Job");
    assert_eq!(compressor.compress("COM.ACME.Job"), "COM.ACME.Job");
    assert_eq!(compressor.compress("org.other.Job"), "Job");
}

#[test]
fn case_sensitive_white_list_requires_exact_case() {
    let compressor = PrefixCompressor::new(
        vec![".".to_string()],
        vec!["com.acme".to_string()],
        CompressAction::Remove,
        true,
    );

    assert_eq!(compressor.compress("COM.ACME.Job"), "Job");
}

#[test]
fn separator_case_variants_apply_when_not_case_sensitive() {
    let compressor = PrefixCompressor::new(
        vec!["X".to_string()],
        Vec::new(),
        CompressAction::Remove,
        false,
    );

    assert_eq!(compressor.compress("fooxbarxbaz"), "baz");
}

#[test]
fn results_are_memoized_per_input() {
    // Arrange
    let compressor = compressor(CompressAction::RemoveNonFirstLetter);

    // Act
    let first = compressor.compress("org.example.app.Service");
    let second = compressor.compress("org.example.app.Service");
    compressor.compress("org.example.Other");

    // Assert
    assert_eq!(first, second);
    assert_eq!(compressor.cached(), 2);
}

#[test]
fn disabled_rule_builds_nothing() {
    let cfg = CompressPrefixConfig::default();

    let built = PrefixCompressor::from_config("logger", &cfg, false).unwrap();

    assert!(built.is_none());
}

#[test]
fn enabled_rule_without_separators_is_rejected() {
    let cfg = CompressPrefixConfig {
        enabled: true,
        separators: vec![String::new()],
        ..CompressPrefixConfig::default()
    };

    let err = PrefixCompressor::from_config("logger", &cfg, false).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidCompressPrefix { field, .. } if field == "logger"));
}
