//! WASM bindings for mindmap-ascii.
//!
//! Exposes `renderFlowchart` and `renderMindMap` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::{IndentConfig, RenderConfig};

fn render_config(unicode: bool) -> RenderConfig {
    RenderConfig {
        unicode,
        ..RenderConfig::default()
    }
}

/// Render indented text as a flowchart.
///
/// - `unicode`: true for Unicode box-drawing chars, false for plain ASCII
#[wasm_bindgen(js_name = "renderFlowchart")]
pub fn render_flowchart(text: &str, unicode: bool) -> String {
    crate::render_flowchart(text, &render_config(unicode), &IndentConfig::default())
}

/// Render a node-link JSON mind map.
#[wasm_bindgen(js_name = "renderMindMap")]
pub fn render_mind_map(json: &str, unicode: bool) -> Result<String, JsError> {
    crate::render_mind_map_json(json.as_bytes(), &render_config(unicode))
        .map_err(|e| JsError::new(&e.to_string()))
}
