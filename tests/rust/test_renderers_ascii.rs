use super::*;
use crate::config::RenderConfig;
use crate::graph::{Color, NodeSize};
use crate::layout::{DiagramView, ViewNode, full_layout};

fn render(labels: &[&str], edges: &[(usize, usize)], unicode: bool) -> String {
    let view = DiagramView {
        nodes: labels
            .iter()
            .map(|l| ViewNode {
                label: l.to_string(),
                color: Color::default(),
                size: NodeSize::default(),
            })
            .collect(),
        edges: edges.to_vec(),
    };
    let layout = full_layout(&view, &RenderConfig::default());
    AsciiRenderer::new(unicode).render(&layout)
}

#[test]
fn test_render_empty() {
    assert_eq!(render(&[], &[], true), "");
}

#[test]
fn test_render_single_node() {
    assert_eq!(render(&["A"], &[], true), "┌───┐\n│ A │\n└───┘\n");
}

#[test]
fn test_render_chain_unicode() {
    let expected = "\
┌───┐
│ A │
└─┬─┘
  │
  │
  ▼
┌───┐
│ B │
└───┘
";
    assert_eq!(render(&["A", "B"], &[(0, 1)], true), expected);
}

#[test]
fn test_render_chain_ascii() {
    let expected = "\
+---+
| A |
+-+-+
  |
  |
  v
+---+
| B |
+---+
";
    assert_eq!(render(&["A", "B"], &[(0, 1)], false), expected);
}

#[test]
fn test_render_fan_out() {
    let expected = "\
┌──────┐
│ Root │
└───┬──┘
    │
    ├──────┐
    ▼      ▼
  ┌───┐  ┌───┐
  │ L │  │ R │
  └───┘  └───┘
";
    assert_eq!(render(&["Root", "L", "R"], &[(0, 1), (0, 2)], true), expected);
}

#[test]
fn test_render_cycle_through_lane() {
    let expected = "
  ┌───┐
  ▼   │
┌───┐ │
│ A │ │
└─┬─┘ │
  │   │
  │   │
  ▼   │
┌───┐ │
│ B │ │
└─┬─┘ │
  │   │
  └───┘
";
    assert_eq!(render(&["A", "B"], &[(0, 1), (1, 0)], true), expected);
}

#[test]
fn test_render_forest_side_by_side() {
    let out = render(&["A", "B"], &[], true);
    assert_eq!(out, "┌───┐  ┌───┐\n│ A │  │ B │\n└───┘  └───┘\n");
}
