use crate::core::error::LineageError;
use lineage_types::{LogEntry, ProcessingLog};
use std::collections::HashSet;
use std::convert::Infallible;

/// Fold rename-only steps into the entry they follow and drop repeated
/// entries, warning about each one.
///
/// Single left-to-right pass: the output is a subsequence of the input (with
/// renames merged), never reordered and never longer. The source log is not
/// modified.
pub fn collapse(log: &ProcessingLog) -> ProcessingLog {
    let folded = fold(log, |entry| {
        tracing::warn!(entry = %entry, "duplicate processing log entry dropped");
        Ok::<(), Infallible>(())
    });
    match folded {
        Ok(entries) => entries.into_iter().collect(),
        Err(never) => match never {},
    }
}

/// Like [`collapse`] but a repeated entry is an error.
pub fn collapse_strict(log: &ProcessingLog) -> Result<ProcessingLog, LineageError> {
    let entries = fold(log, |entry| {
        Err(LineageError::DuplicateInCollapse {
            variable: entry.variable.clone(),
            operation: entry.operation.clone(),
            target: entry.target.clone(),
        })
    })?;
    Ok(entries.into_iter().collect())
}

fn fold<E>(
    log: &ProcessingLog,
    mut on_duplicate: impl FnMut(&LogEntry) -> Result<(), E>,
) -> Result<Vec<LogEntry>, E> {
    let mut retained: Vec<LogEntry> = Vec::with_capacity(log.len());
    let mut seen: HashSet<LogEntry> = HashSet::with_capacity(log.len());

    for entry in log {
        if seen.contains(entry) {
            on_duplicate(entry)?;
            continue;
        }
        seen.insert(entry.clone());

        if let Some(last) = retained.last() {
            if folds_into(entry, last) {
                let merged = last.retargeted(&entry.variable, &entry.target);
                if merged != *last && seen.contains(&merged) {
                    // The folded step already exists earlier in the log.
                    on_duplicate(&merged)?;
                    retained.pop();
                } else {
                    seen.insert(merged.clone());
                    let slot = retained.len() - 1;
                    retained[slot] = merged;
                }
                continue;
            }
        }

        retained.push(entry.clone());
    }

    Ok(retained)
}

/// A rename whose only parent is the node the previous step produced.
fn folds_into(entry: &LogEntry, last: &LogEntry) -> bool {
    entry.is_rename() && matches!(entry.parents.as_slice(), [parent] if *parent == last.target)
}
