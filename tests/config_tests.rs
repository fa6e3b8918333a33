//! Integration tests for configuration management

use credit_tally::config::{Config, ConfigOverrides};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        config.paths.sheet_file.ends_with("sheet.toml"),
        "Default sheet file should be a sheet.toml"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
sheet_file = "./sheet.toml"
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.sheet_file, "./sheet.toml");
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.sheet_file, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$CREDIT_TALLY/test.log"

[paths]
sheet_file = "$CREDIT_TALLY/mine.toml"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("credittally"));
    assert!(!config.logging.file.contains("$CREDIT_TALLY"));
    assert!(config.paths.sheet_file.ends_with("mine.toml"));
    assert!(!config.paths.sheet_file.contains("$CREDIT_TALLY"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").as_deref(), Some("debug"));

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose").as_deref(), Some("true"));
    assert!(config.logging.verbose);

    config
        .set("sheet-file", "/data/sheet.toml")
        .expect("Failed to set sheet file");
    assert_eq!(config.get("sheet_file").as_deref(), Some("/data/sheet.toml"));

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("reports_dir", "/elsewhere").expect("Failed to set");
    config
        .unset("reports_dir", &defaults)
        .expect("Failed to unset");
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);

    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_toml_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    fs::write(
        &config_file,
        toml::to_string_pretty(&config).expect("Failed to serialize"),
    )
    .expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.paths.sheet_file, config.paths.sheet_file);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        sheet_file: Some("./my_sheet.toml".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.sheet_file, "./my_sheet.toml");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.paths.sheet_file.clone();

    config.apply_overrides(&ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    });

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.sheet_file, before);
}

#[test]
fn test_config_display_format() {
    let display_str = Config::from_defaults().to_string();

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("sheet_file"));
    assert!(display_str.contains("reports_dir"));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[paths]
sheet_file = ""
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.sheet_file, defaults.paths.sheet_file);
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();

    assert!(path_str.contains("credittally"));
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
