//! mindmap-ascii — mind-map editor and indented-text flowchart renderer.
//!
//! Two graphs live in a [`Session`]:
//! - a user-edited mind map ([`MindMap`]) with styled nodes, saved and loaded
//!   as node-link JSON;
//! - a flowchart ([`FlowTree`]) rebuilt from indented text by
//!   [`IndentParser`].
//!
//! Either graph renders to ASCII/Unicode text, SVG or (feature `png`) PNG.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod session;
#[cfg(feature = "cli")]
pub mod shell;
#[cfg(feature = "wasm")]
mod wasm;

pub use config::{BlankLines, IndentConfig, RenderConfig, SessionConfig};
pub use error::{Error, GraphError, ImportError, Result};
pub use format::NodeLinkDocument;
pub use graph::{Color, FlowTree, MindMap, NodeSize, NodeStyle};
pub use parsers::{IndentParser, parse_indented};
pub use session::{Action, Download, ImageFormat, Notice, Session, Target};

use layout::{DiagramView, full_layout};
use renderers::{AsciiRenderer, Renderer};

/// Parse indented text and render the resulting flowchart as text art.
pub fn render_flowchart(text: &str, render: &RenderConfig, indent: &IndentConfig) -> String {
    let tree = IndentParser::new(indent.clone()).parse(text);
    let layout = full_layout(&DiagramView::from(&tree), render);
    AsciiRenderer::new(render.unicode).render(&layout)
}

/// Render a node-link JSON mind map as text art.
pub fn render_mind_map_json(json: &[u8], render: &RenderConfig) -> Result<String> {
    let map = MindMap::from_json(json)?;
    let layout = full_layout(&DiagramView::from(&map), render);
    Ok(AsciiRenderer::new(render.unicode).render(&layout))
}
