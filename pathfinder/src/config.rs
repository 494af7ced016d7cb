// config.rs - Path widget defaults

use crate::error::Result;
use crate::heuristic::{Algorithm, Heuristic, SearchOptions};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DIMENSION: i32 = 25;
pub const MIN_DIMENSION: i32     = 25;
pub const MAX_DIMENSION: i32     = 160;
pub const MIN_SPEED: u32         = 0;
pub const MAX_SPEED: u32         = 500;
pub const DEFAULT_SPEED: u32     = (MIN_SPEED + MAX_SPEED) / 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PathConfig {
    pub dimension       : i32,
    pub min_dimension   : i32,
    pub max_dimension   : i32,
    pub allow_diagonals : bool,
    pub heuristic       : Heuristic,
    pub algorithm       : Algorithm,
    pub show_steps      : bool,   // Pace expansions; otherwise solve without pausing
    pub speed           : u32,    // MIN_SPEED..=MAX_SPEED, higher is faster
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            min_dimension: MIN_DIMENSION,
            max_dimension: MAX_DIMENSION,
            allow_diagonals: false,
            heuristic: Heuristic::Manhattan,
            algorithm: Algorithm::AStar,
            show_steps: true,
            speed: DEFAULT_SPEED,
        }
    }
}

impl PathConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_dimensions(dimension: i32, min_dimension: i32, max_dimension: i32) -> Self {
        Self { dimension, min_dimension, max_dimension, ..Self::default() }
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            allow_diagonals: self.allow_diagonals,
            heuristic: self.heuristic,
            algorithm: self.algorithm,
        }
    }
}
