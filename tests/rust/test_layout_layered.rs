use super::*;
use crate::graph::{Color, NodeSize};
use crate::layout::view::ViewNode;

fn view(labels: &[&str], edges: &[(usize, usize)]) -> DiagramView {
    DiagramView {
        nodes: labels
            .iter()
            .map(|l| ViewNode {
                label: l.to_string(),
                color: Color::default(),
                size: NodeSize::default(),
            })
            .collect(),
        edges: edges.to_vec(),
    }
}

fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

// ─── Ranks ────────────────────────────────────────────────────────────────────

#[test]
fn test_ranks_longest_path() {
    // A→B→C plus the shortcut A→C: C still sits below B.
    let (ranks, back) = assign_ranks(3, &[(0, 1), (1, 2), (0, 2)]);
    assert_eq!(ranks, vec![0, 1, 2]);
    assert!(back.is_empty());
}

#[test]
fn test_ranks_break_cycles() {
    let (ranks, back) = assign_ranks(2, &[(0, 1), (1, 0)]);
    assert_eq!(ranks, vec![0, 1]);
    assert!(back.contains(&(1, 0)));
}

#[test]
fn test_ranks_self_loop_is_back_edge() {
    let (ranks, back) = assign_ranks(1, &[(0, 0)]);
    assert_eq!(ranks, vec![0]);
    assert!(back.contains(&(0, 0)));
}

// ─── Ordering ─────────────────────────────────────────────────────────────────

#[test]
fn test_order_follows_parents() {
    // R1, R2 roots; X hangs off R2, Y off R1 → Y is placed before X.
    let ranks = vec![0, 0, 1, 1];
    let layers = order_layers(&ranks, &[(1, 2), (0, 3)]);
    assert_eq!(layers, vec![vec![0, 1], vec![3, 2]]);
}

// ─── Full layout ──────────────────────────────────────────────────────────────

#[test]
fn test_layout_empty() {
    let lr = layout(&DiagramView::default(), &RenderConfig::default());
    assert!(lr.is_empty());
}

#[test]
fn test_layout_tree_positions() {
    let v = view(
        &["Root", "Child1", "Child2", "Grandchild"],
        &[(0, 1), (0, 2), (2, 3)],
    );
    let lr = layout(&v, &RenderConfig::default());

    let geo: Vec<(i64, i64, i64, i64)> = lr
        .nodes
        .iter()
        .map(|n| (n.x, n.y, n.width, n.height))
        .collect();
    assert_eq!(
        geo,
        vec![(0, 0, 8, 3), (0, 6, 10, 3), (12, 6, 10, 3), (10, 12, 14, 3)]
    );
    assert_eq!((lr.width, lr.height), (24, 15));

    assert!(lr.edges.iter().all(|e| e.route == Route::Direct));
    assert_eq!(lr.edges[0].waypoints, pts(&[(4, 3), (4, 4), (5, 4), (5, 5)]));
    assert_eq!(lr.edges[1].waypoints, pts(&[(4, 3), (4, 4), (17, 4), (17, 5)]));
    // Straight down: the bus-row corner collapses away.
    assert_eq!(lr.edges[2].waypoints, pts(&[(17, 9), (17, 10), (17, 11)]));
}

#[test]
fn test_layout_padding_widens_boxes() {
    let v = view(&["Node"], &[]);
    let cfg = RenderConfig {
        unicode: true,
        padding: 3,
    };
    let lr = layout(&v, &cfg);
    assert_eq!(lr.nodes[0].width, 4 + 2 + 6);
}

#[test]
fn test_layout_multiline_label() {
    let v = view(&["one\nthree"], &[]);
    let lr = layout(&v, &RenderConfig::default());
    assert_eq!((lr.nodes[0].width, lr.nodes[0].height), (9, 4));
}

#[test]
fn test_layout_cycle_uses_lane_and_top_gap() {
    let v = view(&["A", "B"], &[(0, 1), (1, 0)]);
    let lr = layout(&v, &RenderConfig::default());
    assert_eq!(lr.nodes[0].y, 3);
    assert_eq!(lr.nodes[1].y, 9);
    assert_eq!(lr.edges[0].route, Route::Direct);
    assert_eq!(lr.edges[1].route, Route::Lane);
    assert_eq!(
        lr.edges[1].waypoints,
        pts(&[(2, 12), (2, 13), (6, 13), (6, 1), (2, 1), (2, 2)])
    );
    assert_eq!((lr.width, lr.height), (7, 14));
}

#[test]
fn test_layout_self_loop() {
    let v = view(&["X"], &[(0, 0)]);
    let lr = layout(&v, &RenderConfig::default());
    assert_eq!(
        lr.edges[0].waypoints,
        pts(&[(2, 6), (2, 7), (6, 7), (6, 1), (2, 1), (2, 2)])
    );
}

#[test]
fn test_layout_long_edge_gets_own_lane() {
    let v = view(&["A", "B", "C"], &[(0, 1), (1, 2), (0, 2)]);
    let lr = layout(&v, &RenderConfig::default());
    assert_eq!(lr.edges[2].route, Route::Lane);
    let lane_x = lr.edges[2].waypoints[2].x;
    assert!(lr.nodes.iter().all(|n| n.right() < lane_x));
}

#[test]
fn test_layout_lanes_do_not_share_columns() {
    let v = view(&["A", "B", "C"], &[(0, 1), (1, 2), (0, 2), (2, 0)]);
    let lr = layout(&v, &RenderConfig::default());
    let lanes: Vec<i64> = lr
        .edges
        .iter()
        .filter(|e| e.route == Route::Lane)
        .map(|e| e.waypoints[2].x)
        .collect();
    assert_eq!(lanes.len(), 2);
    assert_ne!(lanes[0], lanes[1]);
}
