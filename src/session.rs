//! Session — the explicit owner of both graphs for one editing session.
//!
//! Every user action is one method call that runs to completion and returns
//! an optional [`Notice`] for the host to show. Silently ignored actions
//! (empty node name, equal edge endpoints) return `None`.

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::{Error, GraphError, Result};
use crate::graph::{FlowTree, MindMap, NodeStyle};
use crate::layout::{DiagramView, LayoutResult, full_layout};
use crate::parsers::IndentParser;
use crate::renderers::{AsciiRenderer, Renderer, SvgRenderer};

// ── Host-facing types ────────────────────────────────────────────────────────

/// Transient message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Info(String),
    Error(String),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Info(m) | Notice::Error(m) => m,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Success(m) => write!(f, "ok: {m}"),
            Notice::Info(m) => f.write_str(m),
            Notice::Error(m) => f.write_str(m),
        }
    }
}

/// Bytes handed to the host's download sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Which of the two graphs an export refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    MindMap,
    Flowchart,
}

impl Target {
    fn stem(self) -> &'static str {
        match self {
            Target::MindMap => "mind_map",
            Target::Flowchart => "flowchart",
        }
    }
}

/// Output encodings for rendered drawings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Text,
    Svg,
    #[cfg(feature = "png")]
    Png,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Text => "txt",
            ImageFormat::Svg => "svg",
            #[cfg(feature = "png")]
            ImageFormat::Png => "png",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ImageFormat::Text => "text/plain",
            ImageFormat::Svg => "image/svg+xml",
            #[cfg(feature = "png")]
            ImageFormat::Png => "image/png",
        }
    }

    /// Pick a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" | "text" => Some(ImageFormat::Text),
            "svg" => Some(ImageFormat::Svg),
            #[cfg(feature = "png")]
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }
}

/// A mutating user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddNode { label: String, style: NodeStyle },
    AddEdge { source: String, target: String },
    Reset,
    GenerateFlowchart { text: String },
    Import { bytes: Vec<u8> },
}

// ── Session ──────────────────────────────────────────────────────────────────

/// One editing session: the mind map, the derived flowchart and settings.
#[derive(Debug, Clone, Default)]
pub struct Session {
    mind_map: MindMap,
    flowchart: FlowTree,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        debug!(?config, "session started");
        Self {
            mind_map: MindMap::new(),
            flowchart: FlowTree::new(),
            config,
        }
    }

    pub fn mind_map(&self) -> &MindMap {
        &self.mind_map
    }

    pub fn flowchart(&self) -> &FlowTree {
        &self.flowchart
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Dispatch one action.
    pub fn apply(&mut self, action: Action) -> Option<Notice> {
        match action {
            Action::AddNode { label, style } => self.add_node(&label, style),
            Action::AddEdge { source, target } => self.add_edge(&source, &target),
            Action::Reset => Some(self.reset()),
            Action::GenerateFlowchart { text } => Some(self.generate_flowchart(&text)),
            Action::Import { bytes } => Some(self.import_json(&bytes)),
        }
    }

    // ── Mind-map actions ─────────────────────────────────────────────────────

    /// Add or restyle a node. Empty labels are ignored.
    pub fn add_node(&mut self, label: &str, style: NodeStyle) -> Option<Notice> {
        if !self.mind_map.add_node(label, style) {
            debug!("ignoring node with empty name");
            return None;
        }
        Some(Notice::Success(format!("Node '{label}' added!")))
    }

    /// Connect two nodes. Equal endpoints are ignored.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Option<Notice> {
        match self.mind_map.add_edge(source, target) {
            Ok(true) => Some(Notice::Success(format!(
                "Connection from '{source}' to '{target}' added!"
            ))),
            Ok(false) => {
                debug!(source, "ignoring self connection");
                None
            }
            Err(GraphError::UnknownNode(id)) => {
                Some(Notice::Error(format!(
                "Error adding connection: no node named '{id}'"
            )))
            }
        }
    }

    pub fn reset(&mut self) -> Notice {
        self.mind_map.reset();
        info!("mind map reset");
        Notice::Success("Mind map reset!".to_string())
    }

    /// Replace the mind map with one read from node-link JSON. On failure the
    /// current map is left exactly as it was.
    pub fn import_json(&mut self, bytes: &[u8]) -> Notice {
        match MindMap::from_json(bytes) {
            Ok(map) => {
                info!(
                    nodes = map.node_count(),
                    edges = map.edge_count(),
                    "mind map imported"
                );
                self.mind_map = map;
                Notice::Success("Mind map imported successfully!".to_string())
            }
            Err(e) => {
                warn!(error = %e, "import rejected");
                Notice::Error(Error::from(e).to_string())
            }
        }
    }

    /// Node-link JSON of the current mind map.
    pub fn export_json(&self) -> Result<Download> {
        let json = self.mind_map.to_json().map_err(Error::Export)?;
        Ok(Download {
            file_name: "mind_map.json".to_string(),
            mime: "application/json",
            bytes: json.into_bytes(),
        })
    }

    // ── Flowchart actions ────────────────────────────────────────────────────

    /// Rebuild the flowchart from indented text, discarding the old one.
    pub fn generate_flowchart(&mut self, text: &str) -> Notice {
        self.flowchart = IndentParser::new(self.config.indent.clone()).parse(text);
        info!(
            nodes = self.flowchart.node_count(),
            edges = self.flowchart.edge_count(),
            "flowchart generated"
        );
        if self.flowchart.is_empty() {
            Notice::Info("No lines to chart.".to_string())
        } else {
            Notice::Success(format!(
                "Flowchart generated with {} nodes!",
                self.flowchart.node_count()
            ))
        }
    }

    // ── Rendering ────────────────────────────────────────────────────────────

    pub fn view(&self, target: Target) -> DiagramView {
        match target {
            Target::MindMap => DiagramView::from(&self.mind_map),
            Target::Flowchart => DiagramView::from(&self.flowchart),
        }
    }

    pub fn layout(&self, target: Target) -> LayoutResult {
        full_layout(&self.view(target), &self.config.render)
    }

    /// Text drawing of one graph; empty when the graph has no nodes.
    pub fn render_text(&self, target: Target) -> String {
        AsciiRenderer::new(self.config.render.unicode).render(&self.layout(target))
    }

    pub fn render_svg(&self, target: Target) -> String {
        SvgRenderer::new().render(&self.layout(target))
    }

    /// Render one graph for download.
    pub fn export_image(&self, target: Target, format: ImageFormat) -> Result<Download> {
        let bytes = match format {
            ImageFormat::Text => self.render_text(target).into_bytes(),
            ImageFormat::Svg => self.render_svg(target).into_bytes(),
            #[cfg(feature = "png")]
            ImageFormat::Png => crate::renderers::png::svg_to_png(&self.render_svg(target))?,
        };
        Ok(Download {
            file_name: format!("{}.{}", target.stem(), format.extension()),
            mime: format.mime(),
            bytes,
        })
    }
}
