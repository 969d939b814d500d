//! Error types.
//!
//! Store-level failures are [`GraphError`], node-link import failures are
//! [`ImportError`]; everything the session and CLI can hit is folded into
//! the crate-wide [`Error`].

use thiserror::Error;

/// Errors raised by the mind-map store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint names a node that is not in the graph.
    #[error("unknown node '{0}'")]
    UnknownNode(String),
}

/// Errors raised while reading a node-link JSON document.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Not JSON, or JSON that does not have the node-link shape.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// The document describes an undirected graph.
    #[error("document is not a directed graph")]
    Undirected,
    /// A node entry has an empty id.
    #[error("node #{0} has an empty id")]
    EmptyNodeId(usize),
    /// A node entry has a color or size that cannot be used.
    #[error("node #{index} ('{id}'): {reason}")]
    InvalidNode {
        index: usize,
        id: String,
        reason: String,
    },
    /// A link references a node id absent from `nodes`.
    #[error("link #{index} references unknown node '{id}'")]
    UnknownEndpoint { index: usize, id: String },
}

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("Error importing JSON: {0}")]
    Import(#[from] ImportError),
    #[error("Error exporting JSON: {0}")]
    Export(serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Rasterizing a drawing failed.
    #[error("Error rendering image: {0}")]
    Image(String),
}

pub type Result<T> = std::result::Result<T, Error>;
