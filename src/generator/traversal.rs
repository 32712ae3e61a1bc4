use crate::graph::{GraphDefinition, NodeDefinition};
use ahash::AHashMap;

/// The standard sequencing output handle.
pub const HANDLE_OUT: &str = "out";
/// The taken-branch handle of a conditional block.
pub const HANDLE_THEN: &str = "then";
/// The fallback-branch handle of a conditional block.
pub const HANDLE_ELSE: &str = "else";

/// Read-only successor lookup over a graph snapshot.
///
/// Built once per generation run. Node lookups go through an id map; edge
/// scans stay in edge-array order because that order is the documented
/// tie-break for fan-out wiring.
pub struct GraphIndex<'a> {
    graph: &'a GraphDefinition,
    nodes_by_id: AHashMap<&'a str, &'a NodeDefinition>,
}

impl<'a> GraphIndex<'a> {
    pub fn new(graph: &'a GraphDefinition) -> Self {
        let mut nodes_by_id = AHashMap::with_capacity(graph.nodes.len());
        for node in &graph.nodes {
            // First node wins on duplicate ids, matching edge-order tie-breaks.
            nodes_by_id.entry(node.id.as_str()).or_insert(node);
        }
        Self { graph, nodes_by_id }
    }

    /// Looks up a node by id.
    pub fn node(&self, node_id: &str) -> Option<&'a NodeDefinition> {
        self.nodes_by_id.get(node_id).copied()
    }

    /// Returns every node targeted by an edge leaving `node_id` on `handle`,
    /// in edge-array order. Dangling edges (target not in the node set) are
    /// silently excluded; no match is a normal, empty result.
    pub fn successors(&self, node_id: &str, handle: &str) -> Vec<&'a NodeDefinition> {
        self.graph
            .edges
            .iter()
            .filter(|edge| edge.source == node_id && edge.source_handle == handle)
            .filter_map(|edge| self.node(&edge.target))
            .collect()
    }

    /// First-wins convenience over `successors`. A fan-out on one handle uses
    /// only this edge; the rest are ignored by design.
    pub fn first_successor(&self, node_id: &str, handle: &str) -> Option<&'a NodeDefinition> {
        self.graph
            .edges
            .iter()
            .filter(|edge| edge.source == node_id && edge.source_handle == handle)
            .find_map(|edge| self.node(&edge.target))
    }
}
