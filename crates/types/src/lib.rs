//! Shared data model for processing logs.
//!
//! A [`ProcessingLog`] is the ordered derivation history of one variable
//! (column). It is persisted inside the variable's metadata as a plain list
//! of records and read back later for lineage inspection.

pub mod entry;
pub mod error;
pub mod log;
pub mod metadata;

pub use entry::{
    is_bare_name, node_label, LogEntry, DISAMBIGUATION_MARKER, PATH_SEPARATOR, RENAME_OPERATION,
};
pub use error::LogError;
pub use log::ProcessingLog;
pub use metadata::{TableMetadata, VariableMetadata};
