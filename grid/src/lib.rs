// lib.rs - Bounded square grid shared by the Life and path engines
//
// Cells are stored sparsely: a coordinate is occupied when a node exists for it.
// Edits outside the current dimension are ignored rather than reported.

use std::collections::BTreeSet;
use thiserror::Error;

pub mod node;

pub use node::{GridNode, NodeColor, Point};

// Limits for grids built without explicit bounds
pub const MIN_DIMENSION: i32 = 1;
pub const MAX_DIMENSION: i32 = 512;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid bounds: min {min}, max {max}")]
    InvalidBounds { min: i32, max: i32 },
}

pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    nodes         : BTreeSet<GridNode>,
    dimension     : i32,
    min_dimension : i32,
    max_dimension : i32,
}

impl Grid {
    /// Creates an empty grid using the default bounds.
    pub fn new(dimension: i32) -> Self {
        Self {
            nodes: BTreeSet::new(),
            dimension: dimension.clamp(MIN_DIMENSION, MAX_DIMENSION),
            min_dimension: MIN_DIMENSION,
            max_dimension: MAX_DIMENSION,
        }
    }

    /// Creates an empty grid whose side length is kept within `[min, max]`.
    pub fn with_bounds(dimension: i32, min: i32, max: i32) -> Result<Self> {
        if min < 1 || min > max {
            return Err(GridError::InvalidBounds { min, max });
        }

        Ok(Self {
            nodes: BTreeSet::new(),
            dimension: dimension.clamp(min, max),
            min_dimension: min,
            max_dimension: max,
        })
    }

    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    pub fn min_dimension(&self) -> i32 {
        self.min_dimension
    }

    pub fn max_dimension(&self) -> i32 {
        self.max_dimension
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.dimension).contains(&x) && (0..self.dimension).contains(&y)
    }

    /// Inserts or recolors the node at `(x, y)`. Returns false when the
    /// coordinate lies outside the grid, in which case nothing changes.
    pub fn add_node(&mut self, x: i32, y: i32, color: NodeColor) -> bool {
        self.add(GridNode::with_color(x, y, color))
    }

    pub fn add(&mut self, node: GridNode) -> bool {
        if !self.in_bounds(node.x, node.y) {
            log::trace!("ignoring node {} outside dimension {}", node.point(), self.dimension);
            return false;
        }

        self.nodes.replace(node);
        true
    }

    /// Removes the node at `(x, y)` if present.
    pub fn remove_node(&mut self, x: i32, y: i32) -> bool {
        self.nodes.remove(&GridNode::new(x, y))
    }

    /// Adds a plain node where the cell is empty, removes it otherwise.
    pub fn toggle_node(&mut self, x: i32, y: i32) -> bool {
        if self.remove_node(x, y) {
            return true;
        }
        self.add_node(x, y, NodeColor::Plain)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.nodes.contains(&GridNode::new(x, y))
    }

    pub fn color_at(&self, x: i32, y: i32) -> Option<NodeColor> {
        self.nodes.get(&GridNode::new(x, y)).map(|node| node.color)
    }

    /// Resizes the grid, clamping to the bounds. Nodes that fall outside the
    /// new dimension are discarded. Returns the dimension actually applied.
    pub fn set_dimension(&mut self, dimension: i32) -> i32 {
        let dimension = dimension.clamp(self.min_dimension, self.max_dimension);
        if dimension != self.dimension {
            log::debug!("resizing grid {} -> {}", self.dimension, dimension);
        }

        self.dimension = dimension;
        self.nodes.retain(|node| node.x < dimension && node.y < dimension);
        dimension
    }

    pub fn nodes_of_color(&self, color: NodeColor) -> Vec<GridNode> {
        self.nodes.iter().filter(|node| node.color == color).copied().collect()
    }

    /// Replaces the whole node set. Out-of-bounds nodes are dropped.
    pub fn replace_nodes<I>(&mut self, nodes: I) -> usize
    where
        I: IntoIterator<Item = GridNode>,
    {
        self.nodes.clear();
        for node in nodes {
            self.add(node);
        }
        self.nodes.len()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates nodes ordered by x, then y.
    pub fn iter(&self) -> impl Iterator<Item = &GridNode> + '_ {
        self.nodes.iter()
    }

    pub fn nodes(&self) -> &BTreeSet<GridNode> {
        &self.nodes
    }

    pub fn snapshot(&self) -> Vec<GridNode> {
        self.nodes.iter().copied().collect()
    }

    pub fn points(&self) -> Vec<Point> {
        self.nodes.iter().map(GridNode::point).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_overwrites_color() {
        let mut grid = Grid::new(10);
        assert!(grid.add_node(2, 2, NodeColor::Wall));
        assert!(grid.add_node(2, 2, NodeColor::Start));

        assert_eq!(grid.len(), 1);
        assert_eq!(grid.color_at(2, 2), Some(NodeColor::Start));
    }

    // Known quirk: edits outside the grid are dropped without an error, even
    // when the user was drawing at the edge of a grid that was just shrunk.
    #[test]
    fn out_of_bounds_add_is_silently_ignored() {
        let mut grid = Grid::new(10);
        assert!(!grid.add_node(10, 0, NodeColor::Plain));
        assert!(!grid.add_node(0, -1, NodeColor::Plain));
        assert!(grid.is_empty());
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut grid = Grid::new(5);
        grid.add_node(1, 1, NodeColor::Plain);
        assert!(!grid.remove_node(3, 3));
        assert!(grid.remove_node(1, 1));
        assert!(grid.is_empty());
    }

    #[test]
    fn shrinking_discards_nodes_for_good() {
        let mut grid = Grid::with_bounds(20, 5, 30).unwrap();
        grid.add_node(15, 3, NodeColor::Plain);
        grid.add_node(4, 4, NodeColor::Plain);

        grid.set_dimension(10);
        grid.set_dimension(20);

        assert!(!grid.contains(15, 3));
        assert!(grid.contains(4, 4));
    }

    #[test]
    fn set_dimension_clamps_to_bounds() {
        let mut grid = Grid::with_bounds(50, 50, 150).unwrap();
        assert_eq!(grid.set_dimension(10), 50);
        assert_eq!(grid.set_dimension(400), 150);
    }

    #[test]
    fn clear_keeps_dimension() {
        let mut grid = Grid::new(12);
        grid.toggle_node(1, 2);
        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.dimension(), 12);
    }

    #[test]
    fn nodes_of_color_filters() {
        let mut grid = Grid::new(8);
        grid.add_node(0, 0, NodeColor::Start);
        grid.add_node(7, 7, NodeColor::Goal);
        grid.add_node(3, 3, NodeColor::Wall);
        grid.add_node(3, 4, NodeColor::Wall);

        assert_eq!(grid.nodes_of_color(NodeColor::Wall).len(), 2);
        assert_eq!(grid.nodes_of_color(NodeColor::Start), vec![GridNode::new(0, 0)]);
    }

    #[test]
    fn rejects_empty_bounds() {
        assert_eq!(
            Grid::with_bounds(5, 10, 4),
            Err(GridError::InvalidBounds { min: 10, max: 4 })
        );
    }

    proptest! {
        #[test]
        fn resize_keeps_only_in_range_nodes(
            cells in proptest::collection::vec((0i32..40, 0i32..40), 0..60),
            dimension in 1i32..40,
            x in 0i32..40,
            y in 0i32..40,
        ) {
            let mut grid = Grid::with_bounds(40, 1, 40).unwrap();
            for &(cx, cy) in &cells {
                grid.add_node(cx, cy, NodeColor::Plain);
            }

            grid.set_dimension(dimension);

            for &(cx, cy) in &cells {
                prop_assert_eq!(grid.contains(cx, cy), cx < dimension && cy < dimension);
            }

            let added = grid.add_node(x, y, NodeColor::Plain);
            prop_assert_eq!(added, x < dimension && y < dimension);
            prop_assert_eq!(grid.contains(x, y), added);
        }
    }
}
