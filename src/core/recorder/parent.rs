use lineage_types::{ProcessingLog, VariableMetadata};
use std::borrow::Cow;
use std::fmt;

/// Something a transformation consumed, as seen by the recorder.
#[derive(Debug, Clone, PartialEq)]
pub enum Parent<'a> {
    /// A source column or any input identified by name alone.
    Named(Cow<'a, str>),
    /// A variable carrying its own processing log.
    Logged(&'a ProcessingLog),
    /// A literal or constant, identified by its display form.
    Value(String),
}

impl<'a> Parent<'a> {
    pub fn named(name: impl Into<Cow<'a, str>>) -> Self {
        Parent::Named(name.into())
    }

    pub fn logged(log: &'a ProcessingLog) -> Self {
        Parent::Logged(log)
    }

    pub fn value(value: impl fmt::Display) -> Self {
        Parent::Value(value.to_string())
    }

    /// Build a parent from a metadata-bearing collaborator. A processing log
    /// wins over a name, a name wins over the display form.
    pub fn from_source<S: LineageSource + ?Sized>(source: &'a S) -> Self {
        if let Some(log) = source.processing_log() {
            Parent::Logged(log)
        } else if let Some(name) = source.name() {
            Parent::Named(Cow::Borrowed(name))
        } else {
            Parent::Value(source.display_value())
        }
    }

    /// Node name this parent contributes to an entry produced for `variable`.
    ///
    /// A logged parent with no history yet stands for the variable being
    /// produced.
    pub fn resolve(&self, variable: &str) -> String {
        match self {
            Parent::Named(name) => name.to_string(),
            Parent::Logged(log) => match log.last() {
                Some(entry) => entry.target.clone(),
                None => variable.to_string(),
            },
            Parent::Value(display) => display.clone(),
        }
    }
}

impl<'a> From<&'a str> for Parent<'a> {
    fn from(name: &'a str) -> Self {
        Parent::Named(Cow::Borrowed(name))
    }
}

impl<'a> From<&'a String> for Parent<'a> {
    fn from(name: &'a String) -> Self {
        Parent::Named(Cow::Borrowed(name.as_str()))
    }
}

impl<'a> From<&'a ProcessingLog> for Parent<'a> {
    fn from(log: &'a ProcessingLog) -> Self {
        Parent::Logged(log)
    }
}

impl<'a> From<&'a VariableMetadata> for Parent<'a> {
    fn from(meta: &'a VariableMetadata) -> Self {
        Parent::from_source(meta)
    }
}

/// Minimal shape the recorder needs from a collaborator's metadata object.
pub trait LineageSource {
    fn processing_log(&self) -> Option<&ProcessingLog> {
        None
    }

    fn name(&self) -> Option<&str> {
        None
    }

    fn display_value(&self) -> String;
}

impl LineageSource for VariableMetadata {
    fn processing_log(&self) -> Option<&ProcessingLog> {
        Some(&self.processing_log)
    }

    fn name(&self) -> Option<&str> {
        self.title()
    }

    fn display_value(&self) -> String {
        self.title().unwrap_or_default().to_string()
    }
}
