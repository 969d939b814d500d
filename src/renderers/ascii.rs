//! ASCII/Unicode text renderer.
//!
//! Painting order: boxes and labels, edge runs, junctions, exit tees on the
//! source boxes, then arrow heads last so nothing overwrites them.

use super::Renderer;
use super::canvas::{Canvas, Rect};
use super::charset::{Arms, BoxChars, CharSet};
use crate::layout::{LayoutNode, LayoutResult, RoutedEdge};

fn paint_node(canvas: &mut Canvas, ln: &LayoutNode, bc: &BoxChars) {
    canvas.draw_box(Rect::new(ln.x, ln.y, ln.width, ln.height), bc);
    let inner_w = (ln.width - 2).max(0) as usize;
    for (i, line) in ln.label.split('\n').enumerate() {
        let pad = inner_w.saturating_sub(line.chars().count()) / 2;
        canvas.write_str(ln.x + 1 + pad as i64, ln.y + 1 + i as i64, line);
    }
}

fn paint_edge_lines(canvas: &mut Canvas, re: &RoutedEdge) {
    let pts = &re.waypoints;
    if pts.len() < 2 {
        return;
    }
    for pair in pts.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        if p0.y == p1.y {
            canvas.hline_between(p0.y, p0.x, p1.x);
        } else {
            canvas.vline_between(p0.x, p0.y, p1.y);
        }
    }
    // The first cell hangs off the source box.
    canvas.merge_arms(pts[0].x, pts[0].y, Arms::UP.merge(Arms::toward(pts[0], pts[1])));
    for w in pts.windows(3) {
        let arms = Arms::toward(w[1], w[0]).merge(Arms::toward(w[1], w[2]));
        canvas.merge_arms(w[1].x, w[1].y, arms);
    }
}

fn paint_exit(canvas: &mut Canvas, re: &RoutedEdge, source: &LayoutNode) {
    if let Some(first) = re.waypoints.first() {
        canvas.merge_arms(first.x, source.bottom() - 1, Arms::DOWN);
    }
}

fn paint_arrow(canvas: &mut Canvas, re: &RoutedEdge, bc: &BoxChars) {
    if let [.., prev, last] = re.waypoints.as_slice() {
        canvas.set(last.x, last.y, bc.arrow(*prev, *last));
    }
}

/// ASCII/Unicode text renderer.
pub struct AsciiRenderer {
    pub unicode: bool,
}

impl AsciiRenderer {
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }
}

impl Renderer for AsciiRenderer {
    fn render(&self, layout: &LayoutResult) -> String {
        if layout.is_empty() {
            return String::new();
        }
        let cs = CharSet::from_unicode_flag(self.unicode);
        let bc = BoxChars::for_charset(cs);
        let mut canvas = Canvas::new(
            layout.width.max(0) as usize,
            layout.height.max(0) as usize,
            cs,
        );

        for ln in &layout.nodes {
            paint_node(&mut canvas, ln, &bc);
        }
        for re in &layout.edges {
            paint_edge_lines(&mut canvas, re);
        }
        for re in &layout.edges {
            paint_exit(&mut canvas, re, &layout.nodes[re.from]);
        }
        for re in &layout.edges {
            paint_arrow(&mut canvas, re, &bc);
        }
        canvas.render_to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_ascii.rs"]
mod tests;
