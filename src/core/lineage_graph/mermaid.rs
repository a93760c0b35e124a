use crate::core::config::Direction;
use crate::core::suffix::SuffixGenerator;
use lineage_types::{is_bare_name, node_label, ProcessingLog};
use std::fmt::{self, Write};

/// One endpoint of a lineage edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagramNode {
    /// Node identity; equal ids are the same node.
    pub id: String,
    /// What the user sees: the id without its disambiguation suffix.
    pub label: String,
}

impl DiagramNode {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let label = node_label(&id).to_string();
        Self { id, label }
    }
}

impl fmt::Display for DiagramNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// `source --operation--> target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramEdge {
    pub source: DiagramNode,
    pub operation: String,
    pub target: DiagramNode,
}

/// One edge per (parent, entry). Bare parent names get a fresh suffix here,
/// at render time, so equal constants from different steps stay apart. The
/// log itself is not touched.
pub fn diagram_edges(log: &ProcessingLog, suffixes: &mut SuffixGenerator) -> Vec<DiagramEdge> {
    let mut edges = Vec::new();
    for entry in log {
        let target = endpoint(&entry.target, suffixes);
        for parent in &entry.parents {
            edges.push(DiagramEdge {
                source: endpoint(parent, suffixes),
                operation: entry.operation.clone(),
                target: target.clone(),
            });
        }
    }
    edges
}

fn endpoint(name: &str, suffixes: &mut SuffixGenerator) -> DiagramNode {
    if is_bare_name(name) {
        DiagramNode::new(suffixes.disambiguate(name))
    } else {
        DiagramNode::new(name)
    }
}

pub fn header(direction: Direction) -> String {
    format!("graph {};", direction)
}

pub fn edge_line(edge: &DiagramEdge) -> String {
    format!(
        "{}[\"{}\"] -->|\"{}\"| {}[\"{}\"]",
        mermaid_id(&edge.source.id),
        escape_label(&edge.source.label),
        escape_label(&edge.operation),
        mermaid_id(&edge.target.id),
        escape_label(&edge.target.label),
    )
}

/// Header line followed by one line per edge.
pub fn diagram_lines(direction: Direction, edges: &[DiagramEdge]) -> Vec<String> {
    std::iter::once(header(direction))
        .chain(edges.iter().map(edge_line))
        .collect()
}

/// Mermaid node ids only tolerate a narrow alphabet. Alphanumerics and the
/// `#suffix` pass through; `_` doubles and anything else becomes
/// `_x<HEX>_`, so distinct names never share an id.
pub fn mermaid_id(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for c in id.chars() {
        match c {
            c if c.is_ascii_alphanumeric() || c == '#' => out.push(c),
            '_' => out.push_str("__"),
            c => {
                let _ = write!(out, "_x{:X}_", u32::from(c));
            }
        }
    }
    out
}

fn escape_label(value: &str) -> String {
    value.replace('"', "#quot;")
}
