use super::{parse_flag, LineageConfig};
use crate::core::error::LineageError;
use std::env;
use std::path::Path;

/// File name looked up in the workspace when no explicit config path is given.
pub const CONFIG_FILE_NAME: &str = "lineage.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from workspace root (workspace/lineage.toml)
    /// Environment variables override config file values
    pub fn load_from_workspace(workspace_path: &Path) -> Result<LineageConfig, LineageError> {
        let config_path = workspace_path.join(CONFIG_FILE_NAME);
        let config_file = Self::load_from_file(&config_path)?;

        let mut config = config_file.unwrap_or_default();
        Self::apply_env_overrides(&mut config);

        Ok(config)
    }

    /// Load an explicitly requested config file; unlike the workspace lookup
    /// the file must exist.
    pub fn load_explicit(path: &Path) -> Result<LineageConfig, LineageError> {
        let mut config = Self::load_from_file(path)?.ok_or_else(|| {
            LineageError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
            )
        })?;
        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<LineageConfig>, LineageError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| LineageError::io(path, e))?;
        let config: LineageConfig =
            toml::from_str(&content).map_err(|e| LineageError::parse(path, e))?;

        Ok(Some(config))
    }

    /// Environment variables take precedence over config file values.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut LineageConfig) {
        if let Ok(value) = env::var("PROCESSING_LOG") {
            if let Some(enabled) = parse_flag(&value) {
                config.recording.enabled = enabled;
            }
        }

        if let Ok(value) = env::var("LINEAGE_RENDER_DIRECTION") {
            if let Ok(direction) = value.parse() {
                config.render.direction = direction;
            }
        }

        if let Ok(value) = env::var("LINEAGE_RENDER_AUTO_OPEN") {
            if let Some(auto_open) = parse_flag(&value) {
                config.render.auto_open = auto_open;
            }
        }

        if let Ok(url) = env::var("LINEAGE_MERMAID_URL") {
            if !url.trim().is_empty() {
                config.render.mermaid_script_url = url;
            }
        }
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "PROCESSING_LOG - Record processing log entries (1/true/yes/on, default: off)",
            "LINEAGE_RENDER_DIRECTION - Diagram direction TB, BT, LR or RL (default: TB)",
            "LINEAGE_RENDER_AUTO_OPEN - Open HTML diagrams in the default viewer (default: true)",
            "LINEAGE_MERMAID_URL - Mermaid script embedded in HTML diagrams",
        ]
    }
}
