//! Layered top-down layout on a character grid.
//!
//! Phases:
//! 1. Cycle breaking: DFS back edges (self-loops included) are set aside.
//! 2. Layering: longest path from the sources over the remaining DAG.
//! 3. Ordering: one top-down barycenter sweep over direct parents.
//! 4. Placement: boxes packed left to right, each pulled under the mean
//!    center of its direct parents.
//! 5. Routing: edges into the next layer go straight through the gap;
//!    every other edge takes its own lane right of the drawing.

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{DfsEvent, depth_first_search};

use super::types::{LayoutNode, LayoutResult, Point, Route, RoutedEdge};
use super::view::DiagramView;
use crate::config::RenderConfig;

/// Blank columns between neighbouring boxes in one layer.
pub const NODE_GAP: i64 = 2;
/// Rows between layers: exit row, bus row, arrow row.
pub const LAYER_GAP: i64 = 3;
/// Columns between two lanes.
pub const LANE_GAP: i64 = 2;

// ─── Phase 1–2 ───────────────────────────────────────────────────────────────

/// Assign each node a layer. Returns `(ranks, back_edges)`.
pub fn assign_ranks(node_count: usize, edges: &[(usize, usize)]) -> (Vec<usize>, HashSet<(usize, usize)>) {
    let mut g: DiGraph<(), ()> = DiGraph::with_capacity(node_count, edges.len());
    for _ in 0..node_count {
        g.add_node(());
    }
    for &(s, t) in edges {
        g.add_edge(NodeIndex::new(s), NodeIndex::new(t), ());
    }

    let mut back: HashSet<(usize, usize)> = HashSet::new();
    depth_first_search(&g, g.node_indices(), |event| {
        if let DfsEvent::BackEdge(u, v) = event {
            back.insert((u.index(), v.index()));
        }
    });

    let mut dag: DiGraph<(), ()> = DiGraph::with_capacity(node_count, edges.len());
    for _ in 0..node_count {
        dag.add_node(());
    }
    for &(s, t) in edges {
        if !back.contains(&(s, t)) {
            dag.add_edge(NodeIndex::new(s), NodeIndex::new(t), ());
        }
    }

    let order: Vec<NodeIndex> = toposort(&dag, None).unwrap_or_else(|_| dag.node_indices().collect());
    let mut ranks = vec![0usize; node_count];
    for u in order {
        for v in dag.neighbors(u) {
            ranks[v.index()] = ranks[v.index()].max(ranks[u.index()] + 1);
        }
    }
    (ranks, back)
}

/// `true` when `s → t` is drawn straight into the next layer.
fn is_direct(ranks: &[usize], s: usize, t: usize) -> bool {
    ranks[t] == ranks[s] + 1
}

// ─── Phase 3 ─────────────────────────────────────────────────────────────────

/// Group nodes by rank and order each layer by the barycenter of its direct
/// parents' positions in the layer above. Parentless nodes keep their slot.
pub fn order_layers(ranks: &[usize], edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let layer_count = ranks.iter().max().map_or(0, |&r| r + 1);
    let mut layers: Vec<Vec<usize>> = vec![Vec::new(); layer_count];
    for (node, &rank) in ranks.iter().enumerate() {
        layers[rank].push(node);
    }

    let mut position = vec![0usize; ranks.len()];
    for layer in &layers {
        for (i, &n) in layer.iter().enumerate() {
            position[n] = i;
        }
    }

    for l in 1..layer_count {
        let mut keyed: Vec<(f64, usize)> = layers[l]
            .iter()
            .enumerate()
            .map(|(slot, &n)| {
                let parents: Vec<usize> = edges
                    .iter()
                    .filter(|&&(s, t)| t == n && is_direct(ranks, s, t))
                    .map(|&(s, _)| position[s])
                    .collect();
                let key = if parents.is_empty() {
                    slot as f64
                } else {
                    parents.iter().sum::<usize>() as f64 / parents.len() as f64
                };
                (key, n)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        layers[l] = keyed.into_iter().map(|(_, n)| n).collect();
        for (i, &n) in layers[l].iter().enumerate() {
            position[n] = i;
        }
    }
    layers
}

// ─── Phase 4–5 ───────────────────────────────────────────────────────────────

fn box_size(label: &str, padding: usize) -> (i64, i64) {
    let lines: Vec<&str> = label.split('\n').collect();
    let text_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = text_w as i64 + 2 + 2 * padding as i64;
    let height = lines.len() as i64 + 2;
    (width, height)
}

/// Drop consecutive duplicate waypoints (zero-length segments).
fn dedup(mut pts: Vec<Point>) -> Vec<Point> {
    pts.dedup();
    pts
}

/// Lay out a diagram.
pub fn layout(view: &DiagramView, config: &RenderConfig) -> LayoutResult {
    if view.is_empty() {
        return LayoutResult::default();
    }
    let edges = &view.edges;
    let (ranks, _back) = assign_ranks(view.nodes.len(), edges);
    let layers = order_layers(&ranks, edges);

    let mut nodes: Vec<LayoutNode> = view
        .nodes
        .iter()
        .enumerate()
        .map(|(i, vn)| {
            let (width, height) = box_size(&vn.label, config.padding);
            LayoutNode {
                label: vn.label.clone(),
                color: vn.color.clone(),
                size: vn.size,
                layer: ranks[i],
                x: 0,
                y: 0,
                width,
                height,
            }
        })
        .collect();

    // Rows: an upward lane into the first layer needs a gap above it.
    let lane_into_top = edges
        .iter()
        .any(|&(s, t)| !is_direct(&ranks, s, t) && ranks[t] == 0);
    let mut top = if lane_into_top { LAYER_GAP } else { 0 };
    let mut layer_bottom = Vec::with_capacity(layers.len());
    for layer in &layers {
        let h = layer.iter().map(|&n| nodes[n].height).max().unwrap_or(0);
        for &n in layer {
            nodes[n].y = top;
        }
        layer_bottom.push(top + h);
        top += h + LAYER_GAP;
    }

    // Columns.
    for layer in &layers {
        let mut cursor = 0i64;
        for &n in layer {
            let parent_centers: Vec<i64> = edges
                .iter()
                .filter(|&&(s, t)| t == n && is_direct(&ranks, s, t))
                .map(|&(s, _)| nodes[s].center_x())
                .collect();
            let desired = if parent_centers.is_empty() {
                cursor
            } else {
                parent_centers.iter().sum::<i64>() / parent_centers.len() as i64 - nodes[n].width / 2
            };
            let node = &mut nodes[n];
            node.x = desired.max(cursor);
            cursor = node.x + node.width + NODE_GAP;
        }
    }

    let max_right = nodes.iter().map(LayoutNode::right).max().unwrap_or(0);
    let mut next_lane = max_right + 1;
    let mut routed = Vec::with_capacity(edges.len());
    for &(s, t) in edges {
        let (src, dst) = (&nodes[s], &nodes[t]);
        let (sx, tx) = (src.center_x(), dst.center_x());
        let exit = layer_bottom[src.layer] + 1;
        let entry = dst.y - 2;
        let (route, waypoints) = if is_direct(&ranks, s, t) {
            (
                Route::Direct,
                vec![
                    Point::new(sx, src.bottom()),
                    Point::new(sx, exit),
                    Point::new(tx, exit),
                    Point::new(tx, dst.y - 1),
                ],
            )
        } else {
            let lane = next_lane;
            next_lane += LANE_GAP;
            (
                Route::Lane,
                vec![
                    Point::new(sx, src.bottom()),
                    Point::new(sx, exit),
                    Point::new(lane, exit),
                    Point::new(lane, entry),
                    Point::new(tx, entry),
                    Point::new(tx, dst.y - 1),
                ],
            )
        };
        routed.push(RoutedEdge {
            from: s,
            to: t,
            route,
            waypoints: dedup(waypoints),
        });
    }

    let width = routed
        .iter()
        .flat_map(|e| e.waypoints.iter().map(|p| p.x + 1))
        .chain(std::iter::once(max_right))
        .max()
        .unwrap_or(0);
    let height = routed
        .iter()
        .flat_map(|e| e.waypoints.iter().map(|p| p.y + 1))
        .chain(nodes.iter().map(LayoutNode::bottom))
        .max()
        .unwrap_or(0);

    LayoutResult {
        nodes,
        edges: routed,
        width,
        height,
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_layered.rs"]
mod tests;
