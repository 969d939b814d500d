//! MindMap — the user-edited directed graph of styled nodes.
//!
//! Wraps a petgraph `DiGraph` and keeps a `HashMap<String, NodeIndex>` for
//! O(1) lookup by label. Labels are node identity.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use super::style::NodeStyle;
use crate::error::GraphError;

/// Node data stored in the mind-map digraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapNode {
    pub label: String,
    pub style: NodeStyle,
}

/// The mind map: labeled, styled nodes and directed connections.
///
/// Every edge endpoint is a node of the graph. Nodes iterate in the order
/// their label was first inserted; edges iterate in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MindMap {
    digraph: DiGraph<MapNode, ()>,
    node_index: HashMap<String, NodeIndex>,
}

impl MindMap {
    /// Create a new, empty mind map.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ─────────────────────────────────────────────────────────────

    /// Insert `label` with `style`, overwriting the style of an existing node
    /// with the same label (upsert). The node keeps its original position.
    ///
    /// Returns `false` without touching the graph when `label` is empty.
    pub fn add_node(&mut self, label: &str, style: NodeStyle) -> bool {
        if label.is_empty() {
            return false;
        }
        match self.node_index.get(label) {
            Some(&idx) => {
                debug!(label, "updating node style");
                self.digraph[idx].style = style;
            }
            None => {
                debug!(label, "adding node");
                let idx = self.digraph.add_node(MapNode {
                    label: label.to_string(),
                    style,
                });
                self.node_index.insert(label.to_string(), idx);
            }
        }
        true
    }

    /// Insert `label` only if no node with that label exists yet.
    ///
    /// Returns `true` when a node was created.
    pub fn insert_node_if_absent(&mut self, label: &str, style: NodeStyle) -> bool {
        if label.is_empty() || self.node_index.contains_key(label) {
            return false;
        }
        self.add_node(label, style)
    }

    /// Add a directed edge `source → target`.
    ///
    /// Returns `Ok(false)` and leaves the graph untouched when both endpoints
    /// are the same label. Duplicate edges are allowed.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Result<bool, GraphError> {
        if source == target {
            return Ok(false);
        }
        let from = self.index_of(source)?;
        let to = self.index_of(target)?;
        debug!(source, target, "adding edge");
        self.digraph.add_edge(from, to, ());
        Ok(true)
    }

    /// Add an edge without the self-loop guard. Used when rebuilding a graph
    /// from a document, which may legitimately contain loops.
    pub(crate) fn add_edge_unchecked(&mut self, source: &str, target: &str) -> Result<(), GraphError> {
        let from = self.index_of(source)?;
        let to = self.index_of(target)?;
        self.digraph.add_edge(from, to, ());
        Ok(())
    }

    /// Replace the graph with an empty one.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn index_of(&self, label: &str) -> Result<NodeIndex, GraphError> {
        self.node_index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(label.to_string()))
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.digraph.node_count() == 0
    }

    pub fn contains(&self, label: &str) -> bool {
        self.node_index.contains_key(label)
    }

    pub fn style(&self, label: &str) -> Option<&NodeStyle> {
        self.node_index.get(label).map(|&idx| &self.digraph[idx].style)
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &MapNode> {
        self.digraph.node_indices().map(|idx| &self.digraph[idx])
    }

    /// All labels, in insertion order. This is the candidate list offered
    /// when picking connection endpoints.
    pub fn labels(&self) -> Vec<String> {
        self.nodes().map(|n| n.label.clone()).collect()
    }

    /// All edges as `(source, target)` label pairs, in insertion order.
    pub fn edges(&self) -> Vec<(String, String)> {
        self.digraph
            .raw_edges()
            .iter()
            .map(|e| {
                (
                    self.digraph[e.source()].label.clone(),
                    self.digraph[e.target()].label.clone(),
                )
            })
            .collect()
    }

    /// Position-based edges: `(source, target)` node positions in [`Self::nodes`] order.
    pub fn edge_positions(&self) -> Vec<(usize, usize)> {
        self.digraph
            .raw_edges()
            .iter()
            .map(|e| (e.source().index(), e.target().index()))
            .collect()
    }

    /// Sorted successor labels of `label`. Empty if the node is absent.
    pub fn successors(&self, label: &str) -> Vec<String> {
        self.neighbors(label, Direction::Outgoing)
    }

    /// Sorted predecessor labels of `label`. Empty if the node is absent.
    pub fn predecessors(&self, label: &str) -> Vec<String> {
        self.neighbors(label, Direction::Incoming)
    }

    fn neighbors(&self, label: &str, dir: Direction) -> Vec<String> {
        match self.node_index.get(label) {
            None => vec![],
            Some(&idx) => {
                let mut result: Vec<String> = self
                    .digraph
                    .neighbors_directed(idx, dir)
                    .map(|n| self.digraph[n].label.clone())
                    .collect();
                result.sort();
                result
            }
        }
    }

    /// Returns `true` if the graph contains no directed cycles.
    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
