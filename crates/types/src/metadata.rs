use crate::log::ProcessingLog;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata attached to one variable. Only the processing log is interpreted;
/// every other key is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableMetadata {
    #[serde(default, skip_serializing_if = "ProcessingLog::is_empty")]
    pub processing_log: ProcessingLog,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VariableMetadata {
    pub fn with_log(processing_log: ProcessingLog) -> Self {
        Self {
            processing_log,
            extra: Map::new(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.extra.get("title").and_then(Value::as_str)
    }
}

/// Table-level metadata document (`<table>.meta.json`), keyed by column name
/// in the order the columns were written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default)]
    pub fields: IndexMap<String, VariableMetadata>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TableMetadata {
    pub fn variable(&self, name: &str) -> Option<&VariableMetadata> {
        self.fields.get(name)
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
