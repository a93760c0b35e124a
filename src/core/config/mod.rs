use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod loader;
pub mod validation;

pub use loader::ConfigLoader;
pub use validation::ConfigValidator;

/// Default location of the client-side Mermaid renderer embedded in HTML output.
pub const DEFAULT_MERMAID_SCRIPT_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/mermaid/10.4.0/mermaid.min.js";

/// Lineage configuration loaded from lineage.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineageConfig {
    /// Processing-log recording
    #[serde(default)]
    pub recording: RecordingConfig,

    /// Diagram rendering
    #[serde(default)]
    pub render: RenderConfig,
}

/// Recording configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RecordingConfig {
    /// Append entries to processing logs. Off unless `PROCESSING_LOG` or the
    /// config file turns it on.
    #[serde(default)]
    pub enabled: bool,
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderConfig {
    #[serde(default)]
    pub direction: Direction,

    /// Open HTML output in the default viewer
    #[serde(default = "default_auto_open")]
    pub auto_open: bool,

    #[serde(default)]
    pub on_duplicate: DuplicatePolicy,

    #[serde(default = "default_mermaid_script_url")]
    pub mermaid_script_url: String,
}

/// Layout direction of the rendered graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Tb,
    Bt,
    Lr,
    Rl,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Direction::Tb => "TB",
            Direction::Bt => "BT",
            Direction::Lr => "LR",
            Direction::Rl => "RL",
        };
        f.write_str(code)
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "TB" | "TD" => Ok(Direction::Tb),
            "BT" => Ok(Direction::Bt),
            "LR" => Ok(Direction::Lr),
            "RL" => Ok(Direction::Rl),
            _ => Err(format!(
                "invalid render.direction '{}'; supported values are TB, BT, LR, RL",
                value
            )),
        }
    }
}

/// What collapsing does when a log holds the same entry twice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Drop the repeat and log a warning.
    #[default]
    Skip,
    /// Abort rendering with an error.
    Fail,
}

fn default_auto_open() -> bool {
    true
}

fn default_mermaid_script_url() -> String {
    DEFAULT_MERMAID_SCRIPT_URL.to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            direction: Direction::default(),
            auto_open: default_auto_open(),
            on_duplicate: DuplicatePolicy::default(),
            mermaid_script_url: default_mermaid_script_url(),
        }
    }
}

/// Parse the usual spellings of an on/off switch. Unknown spellings yield `None`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
