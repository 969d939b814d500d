//! FlowTree — the forest derived from indented text.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

/// Directed parent → child graph keyed by label.
///
/// Lines with identical text share one node, so a label that appears under
/// two parents ends up with two incoming edges. With distinct labels the
/// graph is always a forest.
#[derive(Debug, Clone, Default)]
pub struct FlowTree {
    digraph: DiGraph<String, ()>,
    node_index: HashMap<String, NodeIndex>,
}

impl FlowTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `label`. No-op if it already exists.
    pub fn insert_node(&mut self, label: &str) {
        if !self.node_index.contains_key(label) {
            let idx = self.digraph.add_node(label.to_string());
            self.node_index.insert(label.to_string(), idx);
        }
    }

    /// Add `parent → child`, creating either endpoint if needed.
    pub fn add_edge(&mut self, parent: &str, child: &str) {
        self.insert_node(parent);
        self.insert_node(child);
        let from = self.node_index[parent];
        let to = self.node_index[child];
        self.digraph.add_edge(from, to, ());
    }

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

    /// Labels in first-seen order.
    pub fn labels(&self) -> Vec<String> {
        self.digraph
            .node_indices()
            .map(|idx| self.digraph[idx].clone())
            .collect()
    }

    /// `(parent, child)` pairs in the order the parser produced them.
    pub fn edges(&self) -> Vec<(String, String)> {
        self.digraph
            .raw_edges()
            .iter()
            .map(|e| {
                (
                    self.digraph[e.source()].clone(),
                    self.digraph[e.target()].clone(),
                )
            })
            .collect()
    }

    /// Position-based edges, indexed like [`Self::labels`].
    pub fn edge_positions(&self) -> Vec<(usize, usize)> {
        self.digraph
            .raw_edges()
            .iter()
            .map(|e| (e.source().index(), e.target().index()))
            .collect()
    }

    /// Nodes without a parent, in first-seen order.
    pub fn roots(&self) -> Vec<String> {
        self.digraph
            .node_indices()
            .filter(|&idx| {
                self.digraph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|idx| self.digraph[idx].clone())
            .collect()
    }

    /// Parents of `label` in edge insertion order.
    pub fn parents(&self, label: &str) -> Vec<String> {
        self.ordered_neighbors(label, Direction::Incoming)
    }

    /// Children of `label` in edge insertion order.
    pub fn children(&self, label: &str) -> Vec<String> {
        self.ordered_neighbors(label, Direction::Outgoing)
    }

    fn ordered_neighbors(&self, label: &str, dir: Direction) -> Vec<String> {
        let Some(&idx) = self.node_index.get(label) else {
            return vec![];
        };
        // petgraph walks adjacency lists newest-first.
        let mut result: Vec<String> = self
            .digraph
            .neighbors_directed(idx, dir)
            .map(|n| self.digraph[n].clone())
            .collect();
        result.reverse();
        result
    }

    pub fn in_degree(&self, label: &str) -> usize {
        match self.node_index.get(label) {
            None => 0,
            Some(&idx) => self
                .digraph
                .edges_directed(idx, Direction::Incoming)
                .count(),
        }
    }

    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }

    /// `true` when the graph is acyclic and no node has more than one parent.
    pub fn is_forest(&self) -> bool {
        self.is_dag()
            && self
                .digraph
                .node_indices()
                .all(|idx| self.digraph.edges_directed(idx, Direction::Incoming).count() <= 1)
    }
}
