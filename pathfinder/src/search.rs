// search.rs - One A*/Dijkstra search, advanced a single expansion at a time
//
// Costs are assigned when a cell is first reached: its estimate can only
// improve once, so an entry never changes after it enters the open queue.

use crate::heuristic::{SearchOptions, euclidean_distance};
use crate::node::{OpenEntry, PathNode};
use grid::{Grid, GridNode, NodeColor, Point};
use std::collections::{BinaryHeap, HashMap, HashSet};

const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

#[derive(Debug, Clone, PartialEq)]
pub enum SearchStep {
    /// The given node was taken off the open queue and its neighbors visited.
    Expanded(Point),
    /// The goal was reached; the path runs from start to goal inclusive.
    Found(Vec<PathNode>),
    /// The open queue ran dry.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct Search {
    start        : Point,
    goal         : Point,
    options      : SearchOptions,
    walls        : HashSet<Point>,
    pathable     : HashSet<Point>,            // Every cell but walls, start and goal
    nodes        : HashMap<Point, PathNode>,
    open         : BinaryHeap<OpenEntry>,
    open_members : HashSet<Point>,
    closed       : HashSet<Point>,
    expansions   : usize,
}

impl Search {
    /// Prepares a search on `grid`. Walls are read from the grid once; later
    /// edits do not affect a search in progress.
    pub fn new(grid: &Grid, start: Point, goal: Point, options: SearchOptions) -> Self {
        let walls: HashSet<Point> = grid
            .nodes_of_color(NodeColor::Wall)
            .iter()
            .map(GridNode::point)
            .collect();

        let dimension = grid.dimension();
        let pathable: HashSet<Point> = (0..dimension)
            .flat_map(|x| (0..dimension).map(move |y| Point::new(x, y)))
            .filter(|point| !walls.contains(point) && *point != start && *point != goal)
            .collect();

        let mut nodes: HashMap<Point, PathNode> = pathable
            .iter()
            .chain([&goal])
            .map(|&point| (point, PathNode::new(point)))
            .collect();

        let mut start_node = PathNode::new(start);
        start_node.g = 0.0;
        start_node.h = options.estimate(start, goal);

        let mut open = BinaryHeap::new();
        open.push(OpenEntry::from(&start_node));
        nodes.insert(start, start_node);

        log::debug!(
            "search setup: start {} goal {} walls {} pathable {}",
            start, goal, walls.len(), pathable.len()
        );

        Self {
            start,
            goal,
            options,
            walls,
            pathable,
            nodes,
            open,
            open_members: HashSet::from([start]),
            closed: HashSet::new(),
            expansions: 0,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn walls(&self) -> &HashSet<Point> {
        &self.walls
    }

    pub fn pathable(&self) -> &HashSet<Point> {
        &self.pathable
    }

    pub fn closed(&self) -> &HashSet<Point> {
        &self.closed
    }

    pub fn expansions(&self) -> usize {
        self.expansions
    }

    pub fn node(&self, point: Point) -> Option<&PathNode> {
        self.nodes.get(&point)
    }

    pub fn is_open(&self, point: Point) -> bool {
        self.open_members.contains(&point)
    }

    /// Expands the cheapest open node.
    pub fn step(&mut self) -> SearchStep {
        let Some(entry) = self.open.pop() else {
            return SearchStep::Exhausted;
        };

        let current = entry.point;
        self.open_members.remove(&current);
        self.closed.insert(current);
        self.expansions += 1;

        if current == self.goal {
            return SearchStep::Found(self.reconstruct_path());
        }

        let current_g = self.nodes[&current].g;
        for neighbor in self.neighbors(current) {
            let new_h = self.options.estimate(neighbor, self.goal);
            let node = self
                .nodes
                .get_mut(&neighbor)
                .expect("every enterable cell has bookkeeping");

            if new_h < node.h {
                node.h = new_h;
                node.parent = Some(current);
                node.g = current_g + euclidean_distance(current, neighbor);

                let entry = OpenEntry::from(&*node);
                if self.open_members.insert(neighbor) {
                    self.open.push(entry);
                }
            }
        }

        SearchStep::Expanded(current)
    }

    /// Open nodes tagged for display: `Open` while their parent is the
    /// start, `Closed` further out. Start and goal are left out.
    pub fn frontier(&self) -> Vec<GridNode> {
        let mut frontier: Vec<GridNode> = self
            .open_members
            .iter()
            .filter(|&&point| point != self.start && point != self.goal)
            .filter_map(|point| self.nodes.get(point))
            .map(|node| {
                let grandparent = node
                    .parent
                    .and_then(|parent| self.nodes.get(&parent))
                    .and_then(|parent| parent.parent);

                let color = if grandparent.is_none() { NodeColor::Open } else { NodeColor::Closed };
                GridNode::with_color(node.point.x, node.point.y, color)
            })
            .collect();

        frontier.sort();
        frontier
    }

    fn neighbors(&self, point: Point) -> Vec<Point> {
        let diagonals: &[(i32, i32)] = if self.options.allow_diagonals { &DIAGONAL } else { &[] };

        ORTHOGONAL
            .iter()
            .chain(diagonals)
            .map(|&(dx, dy)| point.offset(dx, dy))
            .filter(|neighbor| *neighbor == self.goal || self.pathable.contains(neighbor))
            .collect()
    }

    /// Walks parent links back from the goal. A broken chain means the
    /// bookkeeping is corrupt, so it panics.
    fn reconstruct_path(&self) -> Vec<PathNode> {
        let mut path = vec![self.nodes[&self.goal]];
        let mut current = self.goal;

        while current != self.start {
            let parent = self.nodes[&current]
                .parent
                .unwrap_or_else(|| panic!("node {current} reached without a parent"));
            path.push(self.nodes[&parent]);
            current = parent;
        }

        path.reverse();
        path
    }
}
