use crate::core::lineage_graph::mermaid::{DiagramEdge, DiagramNode};
use indexmap::IndexMap;
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};

/// Lineage edges as a petgraph graph; endpoints with the same id share a node.
pub fn build_graph(edges: &[DiagramEdge]) -> DiGraph<DiagramNode, String> {
    let mut graph = DiGraph::new();
    let mut node_map: IndexMap<String, NodeIndex> = IndexMap::new();

    for edge in edges {
        let from = node_index(&mut graph, &mut node_map, &edge.source);
        let to = node_index(&mut graph, &mut node_map, &edge.target);
        graph.add_edge(from, to, edge.operation.clone());
    }

    graph
}

fn node_index(
    graph: &mut DiGraph<DiagramNode, String>,
    node_map: &mut IndexMap<String, NodeIndex>,
    node: &DiagramNode,
) -> NodeIndex {
    *node_map
        .entry(node.id.clone())
        .or_insert_with(|| graph.add_node(node.clone()))
}

/// Render the lineage edges as a Graphviz DOT string using petgraph.
pub fn edges_to_dot(edges: &[DiagramEdge]) -> String {
    let graph = build_graph(edges);
    format!("{}", Dot::new(&graph))
}
