// node.rs - Cell coordinates and the color-tagged node stored in a grid

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A plain integer coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offsets this point, used for neighbor lookups.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Tag carried by a node. Life cells are `Plain`; the path widget marks its
/// start, goal and walls, and search bookkeeping uses `Open`/`Closed`/`Path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeColor {
    #[default]
    Plain,
    Start,
    Goal,
    Wall,
    Open,
    Closed,
    Path,
}

/// An occupied cell. Equality, ordering and hashing use the coordinate only,
/// so re-adding a node at the same spot with another color replaces it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridNode {
    pub x     : i32,
    pub y     : i32,
    pub color : NodeColor,
}

impl GridNode {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y, color: NodeColor::Plain }
    }

    pub const fn with_color(x: i32, y: i32, color: NodeColor) -> Self {
        Self { x, y, color }
    }

    pub const fn point(&self) -> Point {
        Point { x: self.x, y: self.y }
    }
}

impl From<Point> for GridNode {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

impl PartialEq for GridNode {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for GridNode {}

impl Hash for GridNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl PartialOrd for GridNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridNode {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.x, self.y).cmp(&(other.x, other.y))
    }
}
