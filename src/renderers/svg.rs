//! SVG renderer — draws a layout as circles and arrowed polylines.
//!
//! Grid cells map to `CELL_W × CELL_H` pixels. Each node is a circle filled
//! with its color whose area grows with its size, with the label on top.

use super::Renderer;
use crate::layout::{LayoutNode, LayoutResult, Point};

// ── Constants ────────────────────────────────────────────────────────────────

const CELL_W: i64 = 10;
const CELL_H: i64 = 20;
const FONT_SIZE: i64 = 14;
const FONT_FAMILY: &str = "sans-serif";
const PADDING: i64 = 20;
const EDGE_COLOR: &str = "#555555";
/// Circle radius per square root of node size, in pixels.
const RADIUS_SCALE: f64 = 0.7;
/// Largest radius that still fits inside a three-row box.
const MAX_RADIUS: f64 = 28.0;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Pixel x of the center of grid column `col`.
fn cx(col: i64) -> i64 {
    PADDING + col * CELL_W + CELL_W / 2
}

/// Pixel y of the center of grid row `row`.
fn cy(row: i64) -> i64 {
    PADDING + row * CELL_H + CELL_H / 2
}

pub fn radius(ln: &LayoutNode) -> f64 {
    (f64::from(ln.size.get()).sqrt() * RADIUS_SCALE).min(MAX_RADIUS)
}

/// Circle and label for one node.
fn render_node(ln: &LayoutNode) -> String {
    let (x, y) = (cx(ln.center_x()), cy(ln.center_y()));
    let r = radius(ln);
    let circle = format!(
        r#"  <circle cx="{x}" cy="{y}" r="{r:.1}" fill="{}" stroke="none"/>"#,
        ln.color
    );
    let lines: Vec<String> = ln.label.split('\n').map(escape).collect();
    let f = format!(r#"font-family="{FONT_FAMILY}" font-size="{FONT_SIZE}""#);
    let text = if let [only] = lines.as_slice() {
        format!(
            r#"  <text x="{x}" y="{y}" dominant-baseline="central" text-anchor="middle" {f}>{only}</text>"#
        )
    } else {
        let line_h = FONT_SIZE + 2;
        let start_y = y - (lines.len() as i64 * line_h) / 2 + FONT_SIZE / 2;
        let tspans: String = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let ty = start_y + i as i64 * line_h;
                format!(r#"<tspan x="{x}" y="{ty}">{line}</tspan>"#)
            })
            .collect();
        format!(r#"  <text text-anchor="middle" {f}>{tspans}</text>"#)
    };
    format!("{circle}\n{text}")
}

/// Polyline through the cell centers of `waypoints`, trimmed so it leaves
/// the source circle and stops on the target circle.
fn edge_points(waypoints: &[Point], source: &LayoutNode, target: &LayoutNode) -> Vec<(f64, f64)> {
    let mut pts: Vec<(f64, f64)> = waypoints
        .iter()
        .map(|p| (cx(p.x) as f64, cy(p.y) as f64))
        .collect();
    if let Some(first) = pts.first_mut() {
        first.1 = cy(source.center_y()) as f64 + radius(source);
    }
    if let Some(last) = pts.last_mut() {
        last.1 = cy(target.center_y()) as f64 - radius(target);
    }
    pts
}

// ── Public renderer ──────────────────────────────────────────────────────────

/// SVG document renderer.
#[derive(Debug, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Pixel dimensions of the document for `layout`.
    pub fn dimensions(layout: &LayoutResult) -> (i64, i64) {
        (
            2 * PADDING + layout.width.max(1) * CELL_W,
            2 * PADDING + layout.height.max(1) * CELL_H,
        )
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, layout: &LayoutResult) -> String {
        let (w, h) = Self::dimensions(layout);
        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
            ),
            format!(
                r#"  <defs><marker id="arrow" markerWidth="10" markerHeight="7" refX="10" refY="3.5" orient="auto"><polygon points="0 0, 10 3.5, 0 7" fill="{EDGE_COLOR}"/></marker></defs>"#
            ),
            r#"  <rect width="100%" height="100%" fill="white"/>"#.to_string(),
        ];

        // Edges first so circles cover their ends.
        for re in &layout.edges {
            let pts = edge_points(&re.waypoints, &layout.nodes[re.from], &layout.nodes[re.to]);
            if pts.len() < 2 {
                continue;
            }
            let points: Vec<String> = pts.iter().map(|(x, y)| format!("{x:.1},{y:.1}")).collect();
            parts.push(format!(
                r#"  <polyline points="{}" fill="none" stroke="{EDGE_COLOR}" stroke-width="1.5" marker-end="url(#arrow)"/>"#,
                points.join(" ")
            ));
        }
        parts.extend(layout.nodes.iter().map(render_node));
        parts.push("</svg>\n".to_string());
        parts.join("\n")
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
