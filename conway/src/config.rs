// config.rs - Life simulation defaults and their runtime overrides

use crate::error::Result;
use grid::Grid;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DIMENSION: i32             = 50;   // Side length on open/clear
pub const MIN_DIMENSION: i32                 = 50;
pub const MAX_DIMENSION: i32                 = 150;
pub const MIN_ITERATIONS_PER_SECOND: u32     = 1;
pub const DEFAULT_ITERATIONS_PER_SECOND: u32 = 45;
pub const MAX_ITERATIONS_PER_SECOND: u32     = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LifeConfig {
    pub dimension             : i32,
    pub min_dimension         : i32,
    pub max_dimension         : i32,
    pub iterations_per_second : u32,
    pub detect_oscillations   : bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            min_dimension: MIN_DIMENSION,
            max_dimension: MAX_DIMENSION,
            iterations_per_second: DEFAULT_ITERATIONS_PER_SECOND,
            detect_oscillations: true,
        }
    }
}

impl LifeConfig {
    /// Parses a config, falling back to defaults for missing fields.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Same as the default but with custom grid bounds.
    pub fn with_dimensions(dimension: i32, min_dimension: i32, max_dimension: i32) -> Self {
        Self { dimension, min_dimension, max_dimension, ..Self::default() }
    }

    pub(crate) fn empty_grid(&self) -> Result<Grid> {
        Ok(Grid::with_bounds(self.dimension, self.min_dimension, self.max_dimension)?)
    }

    pub(crate) fn clamp_iterations(iterations_per_second: u32) -> u32 {
        iterations_per_second.clamp(MIN_ITERATIONS_PER_SECOND, MAX_ITERATIONS_PER_SECOND)
    }
}
