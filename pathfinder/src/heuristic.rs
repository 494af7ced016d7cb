// heuristic.rs - Distance measures and the search mode switch

use grid::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    AStar,
    Dijkstra,
}

/// Search parameters, fixed for the duration of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchOptions {
    pub allow_diagonals : bool,
    pub heuristic       : Heuristic,
    pub algorithm       : Algorithm,
}

impl SearchOptions {
    /// Estimated cost from `from` to `goal`. Dijkstra uses a constant so the
    /// search degrades to uniform-cost.
    pub fn estimate(&self, from: Point, goal: Point) -> f64 {
        match (self.algorithm, self.heuristic) {
            (Algorithm::Dijkstra, _)            => 1.0,
            (Algorithm::AStar, Heuristic::Manhattan) => manhattan_distance(from, goal),
            (Algorithm::AStar, Heuristic::Euclidean) => euclidean_distance(from, goal),
        }
    }
}

pub fn manhattan_distance(a: Point, b: Point) -> f64 {
    f64::from((a.x - b.x).abs() + (a.y - b.y).abs())
}

pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    f64::from(a.x - b.x).hypot(f64::from(a.y - b.y))
}
