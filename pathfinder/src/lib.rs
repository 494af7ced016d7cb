// lib.rs - A* and Dijkstra path search over a grid, one expansion per step

pub mod config;
pub mod engine;
pub mod error;
pub mod heuristic;
pub mod node;
pub mod search;

pub use config::{DEFAULT_DIMENSION, DEFAULT_SPEED, MAX_DIMENSION, MAX_SPEED, MIN_DIMENSION, MIN_SPEED, PathConfig};
pub use engine::{PathEngine, PathOutcome, PathSnapshot, PathStep, PathingState};
pub use error::{PathError, Result};
pub use heuristic::{Algorithm, Heuristic, SearchOptions, euclidean_distance, manhattan_distance};
pub use node::PathNode;
pub use search::{Search, SearchStep};
