//! Serialized forms of the mind map.

pub mod node_link;

pub use node_link::{LinkRecord, NodeLinkDocument, NodeRecord};
