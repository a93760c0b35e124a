use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Operation label that gets special treatment when recording and collapsing.
pub const RENAME_OPERATION: &str = "rename";

/// Splits a node name into its display label and an opaque uniqueness suffix.
pub const DISAMBIGUATION_MARKER: char = '#';

/// Names containing this character are file paths and are never suffixed.
pub const PATH_SEPARATOR: char = '/';

/// One transformation step in a variable's derivation history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogEntry {
    pub variable: String,
    pub parents: Vec<String>,
    pub operation: String,
    pub target: String,
    #[serde(
        default,
        deserialize_with = "non_blank",
        skip_serializing_if = "is_blank"
    )]
    pub comment: Option<String>,
}

impl LogEntry {
    pub fn new(
        variable: impl Into<String>,
        parents: Vec<String>,
        operation: impl Into<String>,
        target: impl Into<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            variable: variable.into(),
            parents,
            operation: operation.into(),
            target: target.into(),
            comment: comment.filter(|c| !c.is_empty()),
        }
    }

    pub fn is_rename(&self) -> bool {
        self.operation == RENAME_OPERATION
    }

    /// Clone this entry under a different variable and target, leaving the
    /// operation, parents and comment untouched.
    pub fn retargeted(&self, variable: &str, target: &str) -> Self {
        Self {
            variable: variable.to_string(),
            target: target.to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <- {}({}) as {}",
            self.variable,
            self.operation,
            self.parents.join(", "),
            self.target
        )?;
        if let Some(comment) = &self.comment {
            write!(f, " # {}", comment)?;
        }
        Ok(())
    }
}

/// Display label of a node name: everything before the first marker.
pub fn node_label(name: &str) -> &str {
    match name.split_once(DISAMBIGUATION_MARKER) {
        Some((label, _)) => label,
        None => name,
    }
}

/// A bare name carries neither a marker nor a path separator, so it refers to
/// a constant or an unidentified source and is not globally unique.
pub fn is_bare_name(name: &str) -> bool {
    !name.contains(DISAMBIGUATION_MARKER) && !name.contains(PATH_SEPARATOR)
}

fn is_blank(comment: &Option<String>) -> bool {
    comment.as_deref().map_or(true, str::is_empty)
}

/// An empty comment reads back as no comment.
fn non_blank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.filter(|c| !c.is_empty()))
}
