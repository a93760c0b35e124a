use lineage_types::LogError;
use std::path::PathBuf;
use thiserror::Error;

/// Broad classification used by reporters and exit handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A lineage invariant was broken by the caller (duplicate entry, bad record).
    InvariantError,
    /// The requested table or indicator does not exist.
    LookupError,
    ValidationError,
    SerializationError,
    IoError,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Error)]
pub enum LineageError {
    #[error(transparent)]
    Log(#[from] LogError),

    #[error(
        "duplicate entry while collapsing processing log: variable '{variable}' (operation '{operation}', target '{target}')"
    )]
    DuplicateInCollapse {
        variable: String,
        operation: String,
        target: String,
    },

    #[error("table '{table}' not found in {}", .dataset.display())]
    TableNotFound { dataset: PathBuf, table: String },

    #[error("Indicator {indicator} not found in table {table}. Available indicators:\n  {}", .available.join("\n  "))]
    IndicatorNotFound {
        table: String,
        indicator: String,
        available: Vec<String>,
    },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl LineageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LineageError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        LineageError::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            LineageError::Log(_) | LineageError::DuplicateInCollapse { .. } => {
                ErrorCategory::InvariantError
            }
            LineageError::TableNotFound { .. } | LineageError::IndicatorNotFound { .. } => {
                ErrorCategory::LookupError
            }
            LineageError::Config(_) => ErrorCategory::ValidationError,
            LineageError::Parse { .. } => ErrorCategory::SerializationError,
            LineageError::Io { .. } => ErrorCategory::IoError,
        }
    }

    /// Stable code printed next to the message so failures can be grepped for.
    pub fn code(&self) -> &'static str {
        match self {
            LineageError::Log(LogError::DuplicateEntry { .. }) => "LINEAGE-001",
            LineageError::Log(LogError::MissingField { .. }) => "LINEAGE-002",
            LineageError::Log(LogError::InvalidField { .. }) => "LINEAGE-003",
            LineageError::DuplicateInCollapse { .. } => "LINEAGE-004",
            LineageError::TableNotFound { .. } => "LINEAGE-010",
            LineageError::IndicatorNotFound { .. } => "LINEAGE-011",
            LineageError::Config(_) => "LINEAGE-020",
            LineageError::Parse { .. } => "LINEAGE-030",
            LineageError::Io { .. } => "LINEAGE-031",
        }
    }

    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            LineageError::Log(LogError::DuplicateEntry { .. }) => {
                Some("Check whether the same transformation step ran twice against this variable")
            }
            LineageError::Log(_) => Some("The persisted processing log is malformed; regenerate the step"),
            LineageError::DuplicateInCollapse { .. } => {
                Some("Set render.on_duplicate = \"skip\" to drop repeated entries")
            }
            LineageError::IndicatorNotFound { .. } => Some("Run `lineage list` to see indicators"),
            _ => None,
        }
    }
}

pub trait ErrorReporter {
    fn report_error(&self, error: &LineageError);
    fn report_warning(&self, message: &str, context: Option<String>);
}

/// Writes errors to stderr in the `[ERROR] CODE: message` layout.
pub struct DefaultErrorReporter;

impl DefaultErrorReporter {
    pub fn new() -> Self {
        DefaultErrorReporter
    }

    pub fn format_error(error: &LineageError) -> String {
        let mut out = format!("[ERROR] {}: {}", error.code(), error);
        if let Some(hint) = error.recovery_suggestion() {
            out.push_str(&format!("\n  Hint: {}", hint));
        }
        out
    }
}

impl Default for DefaultErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorReporter for DefaultErrorReporter {
    fn report_error(&self, error: &LineageError) {
        tracing::error!(code = error.code(), category = %error.category(), "{}", error);
        eprintln!("{}", Self::format_error(error));
    }

    fn report_warning(&self, message: &str, context: Option<String>) {
        tracing::warn!("{}", message);
        eprintln!("[WARNING] {}", message);
        if let Some(ref ctx) = context {
            eprintln!("  Context: {}", ctx);
        }
    }
}
