// lib.rs - Conway's Game of Life engine
//
// The engine owns a grid of live cells and advances it one generation per
// step, stopping when the pattern stabilizes, oscillates or dies out.

pub mod config;
pub mod engine;
pub mod error;
pub mod generation;
pub mod patterns;
pub mod state_file;
pub mod stats;

pub use config::LifeConfig;
pub use engine::{LifeEngine, LifeOutcome, LifeSnapshot, LifeState, LifeStep};
pub use error::{LifeError, Result};
pub use generation::LifeGeneration;
pub use patterns::{PATTERNS, Pattern, builtin_states, find_pattern, random_state};
pub use state_file::{ConwayState, load_presets};
pub use stats::LifeStats;
