//! Node-link JSON: the save/load format of the mind map.
//!
//! ```json
//! {
//!     "directed": true,
//!     "multigraph": false,
//!     "graph": {},
//!     "nodes": [{ "id": "Idea", "color": "#1f78b4", "size": 300 }],
//!     "links": [{ "source": "Idea", "target": "Detail" }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GraphError, ImportError};
use crate::graph::{Color, MindMap, NodeSize, NodeStyle};

fn default_directed() -> bool {
    true
}

/// Serialized mind map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkDocument {
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub multigraph: bool,
    #[serde(default)]
    pub graph: Map<String, Value>,
    pub nodes: Vec<NodeRecord>,
    pub links: Vec<LinkRecord>,
}

/// One entry of `nodes`. Attributes are kept raw until import validates
/// them; missing ones fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

impl NodeRecord {
    /// Validated style of the `index`-th node.
    fn style(&self, index: usize) -> Result<NodeStyle, ImportError> {
        let invalid = |reason: String| ImportError::InvalidNode {
            index,
            id: self.id.clone(),
            reason,
        };
        let color = match &self.color {
            None => Color::default(),
            Some(c) => c.parse::<Color>().map_err(invalid)?,
        };
        let size = match self.size {
            None => NodeSize::default(),
            Some(n) => u32::try_from(n)
                .ok()
                .and_then(NodeSize::new)
                .ok_or_else(|| invalid(format!("size must be a positive integer, got {n}")))?,
        };
        Ok(NodeStyle::new(color, size))
    }
}

/// One entry of `links`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub source: String,
    pub target: String,
}

impl NodeLinkDocument {
    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ImportError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a document from raw uploaded bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ImportError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Serialize with 4-space indentation.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever writes UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl MindMap {
    /// Snapshot the graph as a node-link document.
    pub fn export(&self) -> NodeLinkDocument {
        NodeLinkDocument {
            directed: true,
            multigraph: false,
            graph: Map::new(),
            nodes: self
                .nodes()
                .map(|n| NodeRecord {
                    id: n.label.clone(),
                    color: Some(n.style.color.to_string()),
                    size: Some(i64::from(n.style.size.get())),
                })
                .collect(),
            links: self
                .edges()
                .into_iter()
                .map(|(source, target)| LinkRecord { source, target })
                .collect(),
        }
    }

    /// Rebuild a graph from a document.
    ///
    /// Duplicate node ids upsert like [`MindMap::add_node`]. Nothing is
    /// returned unless the whole document is valid.
    pub fn import(doc: &NodeLinkDocument) -> Result<Self, ImportError> {
        if !doc.directed {
            return Err(ImportError::Undirected);
        }
        let mut map = MindMap::new();
        for (i, node) in doc.nodes.iter().enumerate() {
            if node.id.is_empty() {
                return Err(ImportError::EmptyNodeId(i));
            }
            map.add_node(&node.id, node.style(i)?);
        }
        for (index, link) in doc.links.iter().enumerate() {
            map.add_edge_unchecked(&link.source, &link.target)
                .map_err(|GraphError::UnknownNode(id)| ImportError::UnknownEndpoint { index, id })?;
        }
        Ok(map)
    }

    /// Export straight to pretty JSON text.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        self.export().to_json()
    }

    /// Import straight from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ImportError> {
        Self::import(&NodeLinkDocument::from_slice(bytes)?)
    }
}
