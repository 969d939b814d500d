//! Layout engine — turns a [`DiagramView`] into boxes and routed edges.

pub mod layered;
pub mod types;
pub mod view;

pub use types::{LayoutNode, LayoutResult, Point, Route, RoutedEdge};
pub use view::{DiagramView, ViewNode};

use crate::config::RenderConfig;

/// Run the full layout pipeline.
pub fn full_layout(view: &DiagramView, config: &RenderConfig) -> LayoutResult {
    layered::layout(view, config)
}
