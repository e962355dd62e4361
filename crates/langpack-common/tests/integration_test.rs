//! Integration tests for langpack-common crate.

use langpack_common::{LangpackError, LanguageCode, LogFormat, LoggingConfig};

#[test]
fn test_language_code_roundtrip_through_string() {
    let code = LanguageCode::from("pt".to_string());
    assert_eq!(code.as_str(), "pt");
    assert_eq!(format!("{code}"), "pt");
    assert!(!code.is_empty());
    assert!(LanguageCode::new("").is_empty());
}

#[test]
fn test_language_codes_sort_lexically() {
    let mut codes = vec![LanguageCode::new("ko"), LanguageCode::new("en"), LanguageCode::new("de")];
    codes.sort();
    let sorted: Vec<&str> = codes.iter().map(LanguageCode::as_str).collect();
    assert_eq!(sorted, vec!["de", "en", "ko"]);
}

#[test]
fn test_logging_config_from_yaml() {
    let yaml = "level: warn\nformat: compact\nfile_path: logs/app.log\ninclude_targets: false\n";
    let config: LoggingConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.file_path.as_deref(), Some(std::path::Path::new("logs/app.log")));
    assert!(!config.include_targets);
}

#[test]
fn test_validation_error_carries_field() {
    let err = LangpackError::validation("empty", Some("localization.default_language".into()));
    match err {
        LangpackError::Validation { field, .. } => {
            assert_eq!(field.as_deref(), Some("localization.default_language"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
