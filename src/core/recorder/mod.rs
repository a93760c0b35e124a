//! Processing-log recording for derived variables.
//!
//! Transformation code calls [`LineageRecorder::add_entry`] at every
//! meaningful step (select, rename, arithmetic, merge). Calls made while the
//! shared [`RecordingSwitch`] is off leave the log untouched.

pub mod parent;
pub mod switch;

pub use parent::{LineageSource, Parent};
pub use switch::{RecordingSwitch, SuspendGuard};

use crate::core::error::LineageError;
use crate::core::suffix::SuffixGenerator;
use lineage_types::{LogEntry, ProcessingLog, RENAME_OPERATION};

/// What `add_entry` did with a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    Recorded,
    /// Recording was switched off.
    Disabled,
    /// A rename directly following an entry for the same variable.
    RenameElided,
}

/// Append-only processing log of one derived variable.
#[derive(Debug, Clone)]
pub struct LineageRecorder {
    log: ProcessingLog,
    switch: RecordingSwitch,
    suffixes: SuffixGenerator,
}

impl LineageRecorder {
    pub fn new(switch: RecordingSwitch) -> Self {
        Self::from_log(ProcessingLog::new(), switch)
    }

    /// Continue recording on top of a log read back from metadata.
    pub fn from_log(log: ProcessingLog, switch: RecordingSwitch) -> Self {
        Self {
            log,
            switch,
            suffixes: SuffixGenerator::from_entropy(),
        }
    }

    pub fn with_suffixes(mut self, suffixes: SuffixGenerator) -> Self {
        self.suffixes = suffixes;
        self
    }

    pub fn switch(&self) -> &RecordingSwitch {
        &self.switch
    }

    pub fn log(&self) -> &ProcessingLog {
        &self.log
    }

    pub fn into_log(self) -> ProcessingLog {
        self.log
    }

    pub fn last_target(&self) -> Option<&str> {
        self.log.last().map(|entry| entry.target.as_str())
    }

    /// Record that `operation` produced `variable` from `parents`.
    ///
    /// A missing or empty `target` is synthesized as `variable#<random>`.
    /// Adding an entry identical to one already in the log is a caller bug and
    /// fails without touching the log.
    pub fn add_entry(
        &mut self,
        variable: &str,
        parents: &[Parent<'_>],
        operation: &str,
        target: Option<&str>,
        comment: Option<&str>,
    ) -> Result<EntryOutcome, LineageError> {
        if !self.switch.is_enabled() {
            return Ok(EntryOutcome::Disabled);
        }

        if operation == RENAME_OPERATION
            && self
                .log
                .last()
                .is_some_and(|last| last.variable == variable)
        {
            tracing::trace!(variable, "rename of the last recorded variable elided");
            return Ok(EntryOutcome::RenameElided);
        }

        let parents = parents
            .iter()
            .map(|parent| parent.resolve(variable))
            .collect();

        let target = match target.filter(|t| !t.is_empty()) {
            Some(target) => target.to_string(),
            None => self.suffixes.disambiguate(variable),
        };

        let entry = LogEntry::new(
            variable,
            parents,
            operation,
            target,
            comment.map(str::to_string),
        );
        tracing::debug!(entry = %entry, "processing log entry");

        self.log.try_push(entry)?;
        Ok(EntryOutcome::Recorded)
    }

    /// Pull in the history of the variables this one is derived from, so the
    /// log alone describes the full lineage. Entries already present are kept
    /// where they are. Returns the number of entries added.
    pub fn inherit(&mut self, ancestors: &[&ProcessingLog]) -> usize {
        if !self.switch.is_enabled() {
            return 0;
        }

        let before = self.log.len();
        let mut sources = Vec::with_capacity(ancestors.len() + 1);
        sources.push(&self.log);
        sources.extend_from_slice(ancestors);
        let merged = ProcessingLog::merged(sources);
        self.log = merged;
        self.log.len() - before
    }
}

impl<'a> From<&'a LineageRecorder> for Parent<'a> {
    fn from(recorder: &'a LineageRecorder) -> Self {
        Parent::Logged(recorder.log())
    }
}
