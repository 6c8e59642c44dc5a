//! Snapping raw pointer positions to grid nodes.

use crate::geometry::distance;
use crate::types::{Node, Point};

/// The numerically nearest node to a pointer, whether or not it is in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    /// Row-major index of the node
    pub index: usize,
    /// Distance from the pointer to the node center
    pub distance: f32,
}

/// Finds the node whose center is closest to `pointer`.
///
/// Ties keep the lowest index. Returns `None` only for an empty node list.
pub fn nearest(pointer: Point, nodes: &[Node]) -> Option<Nearest> {
    let mut best: Option<Nearest> = None;
    for (index, node) in nodes.iter().enumerate() {
        let d = distance(pointer, node.center);
        if best.is_none_or(|b| d < b.distance) {
            best = Some(Nearest { index, distance: d });
        }
    }
    best
}

/// Resolves `pointer` to a captured node.
///
/// The nearest node is accepted only when its distance is strictly below
/// `radius + capture_slack`; otherwise there is no capture.
pub fn resolve<'a>(pointer: Point, nodes: &'a [Node], capture_slack: f32) -> Option<&'a Node> {
    let hit = nearest(pointer, nodes)?;
    let node = &nodes[hit.index];
    (hit.distance < node.radius + capture_slack).then_some(node)
}
