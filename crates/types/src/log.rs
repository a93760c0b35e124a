use crate::entry::LogEntry;
use crate::error::LogError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

const REQUIRED_FIELDS: [&str; 4] = ["variable", "parents", "operation", "target"];

/// Ordered derivation history of a single variable.
///
/// Entries are appended in pipeline execution order and never removed. The
/// serde representation is a plain list of entries so the log can live inside
/// a column's persisted metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessingLog {
    entries: Vec<LogEntry>,
}

impl ProcessingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn contains(&self, entry: &LogEntry) -> bool {
        self.entries.contains(entry)
    }

    /// Append an entry, refusing exact duplicates. The log is unchanged on error.
    pub fn try_push(&mut self, entry: LogEntry) -> Result<(), LogError> {
        if self.contains(&entry) {
            return Err(LogError::DuplicateEntry {
                variable: entry.variable,
                operation: entry.operation,
                target: entry.target,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Concatenate several logs in order, keeping the first occurrence of each
    /// entry. Variables derived from a shared ancestor carry the ancestor's
    /// entries more than once; the merged log carries them once.
    pub fn merged<'a>(logs: impl IntoIterator<Item = &'a ProcessingLog>) -> Self {
        logs.into_iter()
            .flat_map(ProcessingLog::iter)
            .cloned()
            .collect()
    }

    /// Export as ordered key/value records for persistence.
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.entries.iter().map(entry_to_record).collect()
    }

    /// Rebuild a log from persisted records, failing on the first malformed
    /// record or duplicate.
    pub fn from_records(records: &[Map<String, Value>]) -> Result<Self, LogError> {
        let mut log = ProcessingLog::new();
        for (index, record) in records.iter().enumerate() {
            log.try_push(entry_from_record(index, record)?)?;
        }
        Ok(log)
    }
}

impl<'a> IntoIterator for &'a ProcessingLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Collecting keeps the first occurrence of every entry, so a collected log
/// always satisfies the no-duplicates invariant.
impl FromIterator<LogEntry> for ProcessingLog {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let entries = iter
            .into_iter()
            .filter(|entry| seen.insert(entry.clone()))
            .collect();
        Self { entries }
    }
}

impl From<ProcessingLog> for Vec<LogEntry> {
    fn from(log: ProcessingLog) -> Self {
        log.entries
    }
}

fn entry_to_record(entry: &LogEntry) -> Map<String, Value> {
    let mut record = Map::new();
    record.insert("variable".into(), Value::String(entry.variable.clone()));
    record.insert(
        "parents".into(),
        Value::Array(entry.parents.iter().cloned().map(Value::String).collect()),
    );
    record.insert("operation".into(), Value::String(entry.operation.clone()));
    record.insert("target".into(), Value::String(entry.target.clone()));
    if let Some(comment) = entry.comment.as_ref().filter(|c| !c.is_empty()) {
        record.insert("comment".into(), Value::String(comment.clone()));
    }
    record
}

fn entry_from_record(index: usize, record: &Map<String, Value>) -> Result<LogEntry, LogError> {
    for field in REQUIRED_FIELDS {
        if !record.contains_key(field) {
            return Err(LogError::MissingField { index, field });
        }
    }

    let variable = string_field(index, record, "variable")?;
    let operation = string_field(index, record, "operation")?;
    let target = string_field(index, record, "target")?;

    let parents = match &record["parents"] {
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>(),
        _ => None,
    }
    .ok_or(LogError::InvalidField {
        index,
        field: "parents",
        expected: "a list of strings",
    })?;

    let comment = match record.get("comment") {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => {
            return Err(LogError::InvalidField {
                index,
                field: "comment",
                expected: "a string or null",
            })
        }
    };

    Ok(LogEntry::new(variable, parents, operation, target, comment))
}

fn string_field(
    index: usize,
    record: &Map<String, Value>,
    field: &'static str,
) -> Result<String, LogError> {
    record[field]
        .as_str()
        .map(str::to_string)
        .ok_or(LogError::InvalidField {
            index,
            field,
            expected: "a string",
        })
}
