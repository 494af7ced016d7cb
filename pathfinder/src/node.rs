// node.rs - Search bookkeeping per cell and the open queue ordering

use grid::Point;
use serde::Serialize;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A cell plus its A* costs. Equality and hashing use the coordinate only;
/// costs and parent are bookkeeping that changes while the search runs.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PathNode {
    pub point  : Point,
    pub g      : f64,             // Cost from the start
    pub h      : f64,             // Estimated cost to the goal
    pub parent : Option<Point>,   // Back-reference used only to rebuild the path
}

impl PathNode {
    /// An undiscovered node: any estimate improves on it.
    pub fn new(point: Point) -> Self {
        Self { point, g: f64::INFINITY, h: f64::INFINITY, parent: None }
    }

    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for PathNode {}

impl Hash for PathNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.point.hash(state);
    }
}

/// Open queue entry. `BinaryHeap` pops the greatest entry, so the ordering
/// is reversed: lower f first, then lower h, then lower coordinate.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpenEntry {
    pub f     : f64,
    pub h     : f64,
    pub point : Point,
}

impl From<&PathNode> for OpenEntry {
    fn from(node: &PathNode) -> Self {
        Self { f: node.f(), h: node.h, point: node.point }
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.point.cmp(&self.point))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}
