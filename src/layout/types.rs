//! Layout types: Point, LayoutNode, RoutedEdge, LayoutResult.

use crate::graph::{Color, NodeSize};

// ─── Point ───────────────────────────────────────────────────────────────────

/// A cell in character-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

// ─── LayoutNode ───────────────────────────────────────────────────────────────

/// A node with computed layer, position and box dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub label: String,
    pub color: Color,
    pub size: NodeSize,
    pub layer: usize,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl LayoutNode {
    /// Column of the box's center cell; edges attach here.
    pub fn center_x(&self) -> i64 {
        self.x + self.width / 2
    }

    pub fn center_y(&self) -> i64 {
        self.y + self.height / 2
    }

    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }
}

// ─── RoutedEdge ───────────────────────────────────────────────────────────────

/// How an edge travels between its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Target sits exactly one layer below the source: straight through the gap.
    Direct,
    /// Anything else (long, upward, same-layer or self edges): detour through
    /// a vertical lane right of the drawing.
    Lane,
}

/// An edge with orthogonal waypoints, from just below the source box to the
/// cell just above the target box.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedEdge {
    /// Index of the source in [`LayoutResult::nodes`].
    pub from: usize,
    /// Index of the target in [`LayoutResult::nodes`].
    pub to: usize,
    pub route: Route,
    pub waypoints: Vec<Point>,
}

// ─── LayoutResult ─────────────────────────────────────────────────────────────

/// The full output of the layout pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    /// Index-aligned with the input view's nodes.
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<RoutedEdge>,
    /// Grid columns needed to hold every box and route.
    pub width: i64,
    /// Grid rows needed to hold every box and route.
    pub height: i64,
}

impl LayoutResult {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
