//! Turns processing logs into lineage diagrams.
//!
//! Rendering always works on a collapsed copy of the log: rename-only steps
//! are folded into the step they follow and repeated entries are dropped (or
//! rejected, depending on [`DuplicatePolicy`]). The log itself is never
//! modified.

pub mod collapse;
pub mod document;
pub mod dot;
pub mod mermaid;

pub use collapse::{collapse, collapse_strict};
pub use document::{html_document, publish_html};
pub use mermaid::{DiagramEdge, DiagramNode};

use crate::core::config::{DuplicatePolicy, RenderConfig};
use crate::core::error::LineageError;
use crate::core::suffix::SuffixGenerator;
use lineage_types::ProcessingLog;
use std::path::PathBuf;

/// Output produced by [`LineageGraphRenderer::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Mermaid source, one edge per line after the `graph` header.
    Text,
    /// Standalone HTML page that draws the Mermaid source in a browser.
    Html,
    /// Graphviz DOT.
    Dot,
}

pub struct LineageGraphRenderer {
    settings: RenderConfig,
    suffixes: SuffixGenerator,
}

impl LineageGraphRenderer {
    pub fn new(settings: RenderConfig) -> Self {
        Self {
            settings,
            suffixes: SuffixGenerator::from_entropy(),
        }
    }

    pub fn with_suffixes(mut self, suffixes: SuffixGenerator) -> Self {
        self.suffixes = suffixes;
        self
    }

    pub fn settings(&self) -> &RenderConfig {
        &self.settings
    }

    /// Collapse according to the configured duplicate policy.
    pub fn collapse(&self, log: &ProcessingLog) -> Result<ProcessingLog, LineageError> {
        match self.settings.on_duplicate {
            DuplicatePolicy::Skip => Ok(collapse(log)),
            DuplicatePolicy::Fail => collapse_strict(log),
        }
    }

    pub fn collapse_strict(&self, log: &ProcessingLog) -> Result<ProcessingLog, LineageError> {
        collapse_strict(log)
    }

    /// Diagram edges of `log` as given, without collapsing.
    pub fn edges(&mut self, log: &ProcessingLog) -> Vec<DiagramEdge> {
        mermaid::diagram_edges(log, &mut self.suffixes)
    }

    /// Mermaid lines for `log` as given: the `graph` header, then one line per
    /// edge in log order.
    pub fn to_diagram(&mut self, log: &ProcessingLog) -> Vec<String> {
        let edges = self.edges(log);
        mermaid::diagram_lines(self.settings.direction, &edges)
    }

    /// Collapse `log` and render it.
    pub fn render(&mut self, log: &ProcessingLog, mode: RenderMode) -> Result<String, LineageError> {
        let collapsed = self.collapse(log)?;
        tracing::debug!(
            entries = log.len(),
            collapsed = collapsed.len(),
            "rendering processing log"
        );
        Ok(self.render_raw(&collapsed, mode))
    }

    /// Render `log` without collapsing it first.
    pub fn render_raw(&mut self, log: &ProcessingLog, mode: RenderMode) -> String {
        match mode {
            RenderMode::Text => self.to_diagram(log).join("\n"),
            RenderMode::Html => {
                let diagram = self.to_diagram(log).join("\n");
                html_document(&diagram, &self.settings.mermaid_script_url)
            }
            RenderMode::Dot => dot::edges_to_dot(&self.edges(log)),
        }
    }

    /// Write an HTML document to a temporary file, opening it when
    /// `render.auto_open` is set.
    pub fn publish(&self, document: &str) -> Result<PathBuf, LineageError> {
        publish_html(document, self.settings.auto_open)
    }
}

impl Default for LineageGraphRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
