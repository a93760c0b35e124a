use crate::{
    cli::args::{CheckArgs, DiagramFormat, ListArgs, ListFormat, ShowArgs},
    core::{
        lineage_graph::collapse, ConfigLoader, ConfigValidator, LineageConfig, LineageError,
        LineageGraphRenderer, RenderMode, SuffixGenerator,
    },
    utils::serialization::{FileUtils, JsonSerializer, Serializer},
    Result,
};
use lineage_types::{ProcessingLog, TableMetadata};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::env;
use std::path::{Path, PathBuf};

/// Table metadata file suffixes, in lookup order.
const METADATA_SUFFIXES: [&str; 3] = ["meta.json", "meta.yml", "meta.yaml"];

pub fn show(args: ShowArgs) -> Result<()> {
    tracing::info!(
        table = %args.table,
        indicator = %args.indicator,
        "showing lineage"
    );

    let mut config = load_config(args.config.as_deref())?;
    if args.skip_auto_open {
        config.render.auto_open = false;
    }

    let table = load_table(&args.dataset, &args.table)?;
    let variable = table
        .variable(&args.indicator)
        .ok_or_else(|| LineageError::IndicatorNotFound {
            table: args.table.clone(),
            indicator: args.indicator.clone(),
            available: table.variable_names().map(str::to_string).collect(),
        })?;
    let log = &variable.processing_log;
    if log.is_empty() {
        tracing::warn!(indicator = %args.indicator, "indicator has no processing log");
    }

    let mut renderer = LineageGraphRenderer::new(config.render);
    if let Some(seed) = args.seed {
        renderer = renderer.with_suffixes(SuffixGenerator::seeded(seed));
    }

    let mode = match args.format {
        DiagramFormat::Text => RenderMode::Text,
        DiagramFormat::Html => RenderMode::Html,
        DiagramFormat::Dot => RenderMode::Dot,
    };
    let output = if args.raw {
        renderer.render_raw(log, mode)
    } else {
        renderer.render(log, mode)?
    };

    if mode == RenderMode::Html {
        let path = renderer.publish(&output)?;
        println!("Lineage diagram written to {}", path.display());
    } else {
        println!("{}", output);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct IndicatorSummary<'a> {
    indicator: &'a str,
    entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
}

pub fn list(args: ListArgs) -> Result<()> {
    tracing::info!(table = %args.table, "listing indicators");

    let table = load_table(&args.dataset, &args.table)?;
    let summaries: Vec<IndicatorSummary<'_>> = table
        .fields
        .iter()
        .map(|(name, variable)| IndicatorSummary {
            indicator: name,
            entries: variable.processing_log.len(),
            title: variable.title(),
        })
        .collect();

    match args.format {
        ListFormat::Text => {
            for summary in &summaries {
                println!("{}\t{}", summary.indicator, summary.entries);
            }
        }
        ListFormat::Json => {
            let bytes = JsonSerializer.serialize(&summaries)?;
            println!("{}", String::from_utf8(bytes)?);
        }
    }
    Ok(())
}

pub fn check(args: CheckArgs) -> Result<()> {
    tracing::info!(file = %args.file.display(), "checking processing log");

    let records: Vec<Map<String, Value>> = read_document(&args.file)?;
    let log = ProcessingLog::from_records(&records).map_err(LineageError::from)?;
    let collapsed = collapse(&log);

    println!(
        "{}: {} entries ({} after collapsing)",
        args.file.display(),
        log.len(),
        collapsed.len()
    );
    Ok(())
}

/// `--config` must exist; otherwise `lineage.toml` in the working directory
/// is optional.
fn load_config(explicit: Option<&Path>) -> std::result::Result<LineageConfig, LineageError> {
    let config = match explicit {
        Some(path) => ConfigLoader::load_explicit(path)?,
        None => {
            let cwd = env::current_dir().map_err(|e| LineageError::io(".", e))?;
            ConfigLoader::load_from_workspace(&cwd)?
        }
    };
    ConfigValidator::validate(&config)?;
    Ok(config)
}

/// Locate and parse `<dataset>/<table>.meta.{json,yml,yaml}`.
pub fn load_table(dataset: &Path, table: &str) -> std::result::Result<TableMetadata, LineageError> {
    let path = metadata_path(dataset, table).ok_or_else(|| LineageError::TableNotFound {
        dataset: dataset.to_path_buf(),
        table: table.to_string(),
    })?;
    tracing::debug!(path = %path.display(), "reading table metadata");
    read_document(&path)
}

fn metadata_path(dataset: &Path, table: &str) -> Option<PathBuf> {
    METADATA_SUFFIXES
        .iter()
        .map(|suffix| dataset.join(format!("{}.{}", table, suffix)))
        .find(|path| path.is_file())
}

fn read_document<T: DeserializeOwned>(path: &Path) -> std::result::Result<T, LineageError> {
    FileUtils::load_document(path).map_err(|err| match err.downcast::<std::io::Error>() {
        Ok(io) => LineageError::io(path, io),
        Err(other) => LineageError::parse(path, other),
    })
}
