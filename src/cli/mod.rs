pub mod args;
pub mod commands;

pub use args::{CheckArgs, DiagramFormat, ListArgs, ListFormat, ShowArgs};
use clap::{Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
LINEAGE COMMANDS:\n{subcommands}\n";

#[derive(Parser, Debug)]
#[command(name = "lineage")]
#[command(version = crate::VERSION)]
#[command(about = "Inspect and draw the processing logs of ETL variables")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: list the indicators of a table, then show the lineage of one of them."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        about = "Draw the lineage of one indicator",
        long_about = "Show reads a table's metadata, collapses the indicator's processing log, and renders it as a Mermaid diagram (HTML, text) or Graphviz DOT.",
        after_help = "Example:\n    lineage show data/garden/who/2024-07-30/ghe ghe dalys --format text"
    )]
    Show(ShowArgs),
    #[command(
        about = "List the indicators of a table",
        long_about = "List prints every column of the table together with the number of processing log entries it carries.",
        after_help = "Example:\n    lineage list data/garden/who/2024-07-30/ghe ghe"
    )]
    List(ListArgs),
    #[command(
        about = "Validate a persisted processing log",
        long_about = "Check rebuilds a processing log from a JSON or YAML list of entries and reports the first malformed or duplicated entry.",
        after_help = "Example:\n    lineage check dalys.log.json"
    )]
    Check(CheckArgs),
}

pub fn run(args: Args) -> crate::Result<()> {
    match args.command {
        Command::Show(show_args) => commands::show(show_args),
        Command::List(list_args) => commands::list(list_args),
        Command::Check(check_args) => commands::check(check_args),
    }
}
