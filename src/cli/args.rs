use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Directory holding the dataset's `<TABLE>.meta.json` files
    #[arg(value_name = "DATASET_DIR")]
    pub dataset: PathBuf,

    /// Table whose metadata should be read
    #[arg(value_name = "TABLE")]
    pub table: String,

    /// Column whose processing log is drawn
    #[arg(value_name = "INDICATOR")]
    pub indicator: String,

    /// Print Mermaid text or DOT instead of producing an HTML page
    #[arg(long, value_enum, default_value = "html", value_name = "FORMAT")]
    pub format: DiagramFormat,

    /// Draw every recorded step, including rename-only steps
    #[arg(long)]
    pub raw: bool,

    /// Write the HTML page without opening it
    #[arg(long)]
    pub skip_auto_open: bool,

    /// Seed node suffixes so repeated runs produce the same diagram
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Path to custom config file (default: ./lineage.toml)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum, Debug, PartialEq, Eq)]
pub enum DiagramFormat {
    /// Mermaid source on stdout
    Text,
    /// Standalone HTML page rendered in the browser
    Html,
    /// Graphviz DOT on stdout
    Dot,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory holding the dataset's `<TABLE>.meta.json` files
    #[arg(value_name = "DATASET_DIR")]
    pub dataset: PathBuf,

    /// Table whose indicators should be listed
    #[arg(value_name = "TABLE")]
    pub table: String,

    /// Emit either terminal-friendly text or machine-readable JSON
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: ListFormat,
}

#[derive(Clone, Copy, clap::ValueEnum, Debug, PartialEq, Eq)]
pub enum ListFormat {
    /// One indicator per line
    Text,
    /// JSON array suitable for downstream tooling
    Json,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Persisted processing log (JSON or YAML list of entries)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}
