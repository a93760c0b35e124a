use crate::cli::args::DiagramFormat;
use crate::cli::Command;

/// Execution contexts that influence how logging is routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionContext {
    /// The command's result goes to a file or browser; stdout is free.
    Interactive,
    /// The command's result is printed to stdout and may be piped elsewhere.
    Scripted,
}

impl ExecutionContext {
    /// Returns `true` when log lines must stay off stdout.
    pub fn reserves_stdout(self) -> bool {
        matches!(self, ExecutionContext::Scripted)
    }
}

/// Derive the active execution context from a parsed CLI command.
pub fn detect_context(command: &Command) -> ExecutionContext {
    match command {
        Command::Show(args) if args.format == DiagramFormat::Html => ExecutionContext::Interactive,
        Command::Show(_) | Command::List(_) | Command::Check(_) => ExecutionContext::Scripted,
    }
}
