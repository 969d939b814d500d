//! DiagramView — what the renderers consume.
//!
//! A directed graph flattened into a node list carrying label, color and size,
//! and an edge list of node positions into that list.

use crate::graph::{Color, FlowTree, MindMap, NodeSize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub label: String,
    pub color: Color,
    pub size: NodeSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagramView {
    pub nodes: Vec<ViewNode>,
    /// `(source, target)` positions into `nodes`.
    pub edges: Vec<(usize, usize)>,
}

impl DiagramView {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl From<&MindMap> for DiagramView {
    fn from(map: &MindMap) -> Self {
        Self {
            nodes: map
                .nodes()
                .map(|n| ViewNode {
                    label: n.label.clone(),
                    color: n.style.color.clone(),
                    size: n.style.size,
                })
                .collect(),
            edges: map.edge_positions(),
        }
    }
}

/// Flowchart nodes carry no style; they are drawn with the defaults.
impl From<&FlowTree> for DiagramView {
    fn from(tree: &FlowTree) -> Self {
        Self {
            nodes: tree
                .labels()
                .into_iter()
                .map(|label| ViewNode {
                    label,
                    color: Color::default(),
                    size: NodeSize::default(),
                })
                .collect(),
            edges: tree.edge_positions(),
        }
    }
}
