use lineage::core::config::{
    ConfigLoader, ConfigValidator, Direction, DuplicatePolicy, DEFAULT_MERMAID_SCRIPT_URL,
};
use lineage::core::{LineageError, LineageRecorder, RecordingSwitch};
use lineage::logging::config::LoggingConfig;
use lineage::logging::ConsoleOutput;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

fn clear_lineage_env() {
    for v in &[
        "PROCESSING_LOG",
        "LINEAGE_RENDER_DIRECTION",
        "LINEAGE_RENDER_AUTO_OPEN",
        "LINEAGE_MERMAID_URL",
        "LINEAGE_LOG_DIR",
    ] {
        env::remove_var(v);
    }
}

const FULL_CONFIG: &str = r#"
[recording]
enabled = true

[render]
direction = "BT"
auto_open = false
on_duplicate = "fail"
mermaid_script_url = "https://cdn.jsdelivr.net/npm/mermaid@10.4.0/dist/mermaid.min.js"

[logging]
default_level = "warn"
enable_file = false
console_output = "stderr"
"#;

/// Test integration of config loading with environment variables
#[test]
#[serial]
fn test_config_loading_integration() {
    clear_lineage_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("lineage.toml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    let config = ConfigLoader::load_from_workspace(temp_dir.path()).unwrap();
    ConfigValidator::validate(&config).unwrap();

    assert!(config.recording.enabled);
    assert_eq!(config.render.direction, Direction::Bt);
    assert!(!config.render.auto_open);
    assert_eq!(config.render.on_duplicate, DuplicatePolicy::Fail);
    assert!(config.render.mermaid_script_url.contains("jsdelivr"));

    let logging = LoggingConfig::load(Some(&config_path)).unwrap();
    assert_eq!(logging.default_level, "warn");
    assert_eq!(logging.console_output, Some(ConsoleOutput::Stderr));
    assert!(!logging.enable_file);

    assert_eq!(ConfigLoader::load_explicit(&config_path).unwrap(), config);
}

#[test]
#[serial]
fn test_processing_log_env_controls_recording() {
    clear_lineage_env();
    let temp_dir = TempDir::new().unwrap();

    env::set_var("PROCESSING_LOG", "yes");
    let config = ConfigLoader::load_from_workspace(temp_dir.path()).unwrap();
    let mut recorder = LineageRecorder::new(RecordingSwitch::from_config(&config));
    recorder
        .add_entry("x", &[], "select", Some("x#1"), None)
        .unwrap();
    assert_eq!(recorder.log().len(), 1);

    env::set_var("PROCESSING_LOG", "0");
    let config = ConfigLoader::load_from_workspace(temp_dir.path()).unwrap();
    let mut recorder = LineageRecorder::new(RecordingSwitch::from_config(&config));
    recorder
        .add_entry("x", &[], "select", Some("x#1"), None)
        .unwrap();
    assert!(recorder.log().is_empty());

    clear_lineage_env();
}

#[test]
#[serial]
fn test_env_overrides_file_values() {
    clear_lineage_env();
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("lineage.toml"), FULL_CONFIG).unwrap();

    env::set_var("LINEAGE_RENDER_DIRECTION", "LR");
    env::set_var("LINEAGE_RENDER_AUTO_OPEN", "on");
    env::set_var("LINEAGE_MERMAID_URL", "   ");

    let config = ConfigLoader::load_from_workspace(temp_dir.path()).unwrap();
    assert_eq!(config.render.direction, Direction::Lr);
    assert!(config.render.auto_open);
    assert!(config.render.mermaid_script_url.contains("jsdelivr"));

    clear_lineage_env();
}

#[test]
#[serial]
fn test_validator_rejects_unusable_script_url() {
    clear_lineage_env();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("lineage.toml"),
        "[render]\nmermaid_script_url = \"ftp://example.org/mermaid.js\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load_from_workspace(temp_dir.path()).unwrap();
    let err = ConfigValidator::validate(&config).unwrap_err();
    assert!(matches!(err, LineageError::Config(_)));
    assert_eq!(err.code(), "LINEAGE-020");
}

#[test]
#[serial]
fn test_defaults_without_file() {
    clear_lineage_env();
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::load_from_workspace(temp_dir.path()).unwrap();

    assert!(!config.recording.enabled);
    assert_eq!(config.render.mermaid_script_url, DEFAULT_MERMAID_SCRIPT_URL);
    assert!(ConfigLoader::env_var_documentation()
        .iter()
        .any(|line| line.starts_with("PROCESSING_LOG")));
}
