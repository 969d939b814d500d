//! In-memory graph stores.
//!
//! - [`MindMap`]: the user-edited graph with styled nodes.
//! - [`FlowTree`]: the forest derived from indented text.

pub mod flow_tree;
pub mod mind_map;
pub mod style;

pub use flow_tree::FlowTree;
pub use mind_map::{MapNode, MindMap};
pub use style::{Color, NodeSize, NodeStyle};
