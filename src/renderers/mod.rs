//! Renderers and the Renderer trait.

pub mod ascii;
pub mod canvas;
pub mod charset;
#[cfg(feature = "png")]
pub mod png;
pub mod svg;

pub use ascii::AsciiRenderer;
pub use svg::SvgRenderer;

use crate::layout::LayoutResult;

/// Trait for diagram renderers.
pub trait Renderer {
    /// Render a laid-out graph to a string.
    fn render(&self, layout: &LayoutResult) -> String;
}
