// engine.rs - Steppable Conway's Game of Life over a bounded grid

use crate::config::LifeConfig;
use crate::error::{LifeError, Result};
use crate::generation::LifeGeneration;
use crate::state_file::ConwayState;
use crate::stats::LifeStats;
use grid::{Grid, GridNode, NodeColor};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifeState {
    NotStarted,
    Running,
    Paused,
    Stabilized,
    Oscillating,
    Extinct,
}

impl LifeState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Stabilized | Self::Oscillating | Self::Extinct)
    }
}

/// Why a run stopped. `generation` is the generation that would have been
/// produced by the step that detected the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifeOutcome {
    Stabilized { generation: u32 },
    Oscillating { generation: u32 },
    Extinct { generation: u32 },
}

impl LifeOutcome {
    pub fn generation(self) -> u32 {
        match self {
            Self::Stabilized { generation }
            | Self::Oscillating { generation }
            | Self::Extinct { generation } => generation,
        }
    }

    pub fn state(self) -> LifeState {
        match self {
            Self::Stabilized { .. } => LifeState::Stabilized,
            Self::Oscillating { .. } => LifeState::Oscillating,
            Self::Extinct { .. } => LifeState::Extinct,
        }
    }
}

impl fmt::Display for LifeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stabilized { generation } => {
                write!(f, "Simulation stabilized at generation: {generation}")
            }
            Self::Oscillating { generation } => {
                write!(f, "Detected oscillation at generation: {generation}")
            }
            Self::Extinct { generation } => {
                write!(f, "Simulation ended with total elimination at generation: {generation}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeStep {
    Advanced { generation: u32, population: usize },
    Finished(LifeOutcome),
}

/// Everything a renderer needs after a step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeSnapshot {
    pub state     : LifeState,
    pub dimension : i32,
    pub nodes     : Vec<GridNode>,
    pub stats     : LifeStats,
}

pub struct LifeEngine {
    config                : LifeConfig,
    grid                  : Grid,
    stats                 : LifeStats,
    state                 : LifeState,
    last_state            : Option<BTreeSet<GridNode>>,   // One step back, for oscillation checks
    before_start          : Option<Vec<GridNode>>,        // Grid when the last run began
    detect_oscillations   : bool,
    iterations_per_second : u32,
}

impl LifeEngine {
    pub fn new(config: LifeConfig) -> Result<Self> {
        let grid = config.empty_grid()?;
        let iterations_per_second = LifeConfig::clamp_iterations(config.iterations_per_second);

        Ok(Self {
            detect_oscillations: config.detect_oscillations,
            iterations_per_second,
            config,
            grid,
            stats: LifeStats::default(),
            state: LifeState::NotStarted,
            last_state: None,
            before_start: None,
        })
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn stats(&self) -> &LifeStats {
        &self.stats
    }

    pub fn state(&self) -> LifeState {
        self.state
    }

    pub fn detect_oscillations(&self) -> bool {
        self.detect_oscillations
    }

    pub fn set_detect_oscillations(&mut self, detect: bool) {
        self.detect_oscillations = detect;
    }

    pub fn iterations_per_second(&self) -> u32 {
        self.iterations_per_second
    }

    /// Changes the speed; a running loop picks it up on its next sleep.
    pub fn set_iterations_per_second(&mut self, iterations_per_second: u32) -> u32 {
        self.iterations_per_second = LifeConfig::clamp_iterations(iterations_per_second);
        self.iterations_per_second
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.iterations_per_second))
    }

    /// Begins a run from the current grid.
    pub fn start(&mut self) -> Result<()> {
        if self.grid.is_empty() {
            return Err(LifeError::EmptyGrid);
        }

        self.before_start = Some(self.grid.snapshot());
        self.last_state = None;
        self.stats.population = self.grid.len();
        self.state = LifeState::Running;

        log::info!("life run started with {} live cells", self.grid.len());
        Ok(())
    }

    pub fn pause(&mut self) -> bool {
        if self.state != LifeState::Running {
            return false;
        }
        self.state = LifeState::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != LifeState::Paused {
            return false;
        }
        self.state = LifeState::Running;
        true
    }

    /// Computes the next generation and either publishes it or reports why
    /// the run is over. The grid is only replaced once the whole generation
    /// is known.
    pub fn step(&mut self) -> LifeStep {
        let next_nodes: BTreeSet<GridNode> =
            LifeGeneration::from_grid(&self.grid).next().alive_nodes().collect();
        let next_generation = self.stats.generation + 1;

        let outcome = if &next_nodes == self.grid.nodes() {
            Some(LifeOutcome::Stabilized { generation: next_generation })
        } else if self.detect_oscillations && self.last_state.as_ref() == Some(&next_nodes) {
            Some(LifeOutcome::Oscillating { generation: next_generation })
        } else if next_nodes.is_empty() {
            Some(LifeOutcome::Extinct { generation: next_generation })
        } else {
            None
        };

        if let Some(outcome) = outcome {
            self.state = outcome.state();
            log::info!("{outcome}");
            return LifeStep::Finished(outcome);
        }

        self.last_state = Some(self.grid.nodes().clone());
        let population = self.grid.replace_nodes(next_nodes);
        self.stats.record(population);

        log::debug!("generation {} population {}", self.stats.generation, population);
        LifeStep::Advanced { generation: self.stats.generation, population }
    }

    /// Stops, clears the grid and restores every setting to its default.
    pub fn reset(&mut self) {
        self.state = LifeState::NotStarted;
        self.grid.set_dimension(self.config.dimension);
        self.grid.clear();
        self.detect_oscillations = self.config.detect_oscillations;
        self.iterations_per_second = LifeConfig::clamp_iterations(self.config.iterations_per_second);
        self.before_start = None;
        self.last_state = None;
        self.stats.reset();

        log::info!("life simulation reset");
    }

    /// Stops and puts back the grid as it was when the last run started.
    pub fn reset_to_previous_state(&mut self) -> bool {
        let Some(before_start) = self.before_start.clone() else {
            return false;
        };

        self.state = LifeState::NotStarted;
        self.last_state = None;
        self.grid.replace_nodes(before_start);
        self.stats.reset();
        self.stats.population = self.grid.len();
        true
    }

    pub fn snapshot(&self) -> LifeSnapshot {
        LifeSnapshot {
            state: self.state,
            dimension: self.grid.dimension(),
            nodes: self.grid.snapshot(),
            stats: self.stats,
        }
    }

    pub fn to_state(&self, name: impl Into<String>) -> Result<ConwayState> {
        if self.grid.is_empty() {
            return Err(LifeError::EmptyGrid);
        }
        Ok(ConwayState::new(name, self.grid.dimension(), self.grid.points()))
    }

    /// Replaces the simulation with a saved configuration.
    pub fn load_state(&mut self, state: &ConwayState) {
        self.reset();
        self.grid.set_dimension(state.grid_size);
        for point in &state.nodes {
            self.grid.add_node(point.x, point.y, NodeColor::Plain);
        }

        self.before_start = Some(self.grid.snapshot());
        self.stats.population = self.grid.len();

        log::info!("loaded state: {}", state.name);
    }

    /// Loads a state file. Nothing changes unless the whole file parses.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<ConwayState> {
        let state = ConwayState::from_file(path)?;
        self.load_state(&state);
        Ok(state)
    }

    pub fn save_file(&self, dir: impl AsRef<Path>, name: &str) -> Result<PathBuf> {
        self.to_state(name)?.save_to_dir(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> LifeEngine {
        LifeEngine::new(LifeConfig::default()).unwrap()
    }

    #[test]
    fn start_rejects_empty_grid() {
        let mut engine = engine();
        assert!(matches!(engine.start(), Err(LifeError::EmptyGrid)));
        assert_eq!(engine.state(), LifeState::NotStarted);
    }

    #[test]
    fn pause_and_resume_follow_state_machine() {
        let mut engine = engine();
        assert!(!engine.pause());
        engine.grid_mut().toggle_node(10, 10);
        engine.start().unwrap();

        assert!(!engine.resume());
        assert!(engine.pause());
        assert_eq!(engine.state(), LifeState::Paused);
        assert!(engine.resume());
        assert_eq!(engine.state(), LifeState::Running);
    }

    #[test]
    fn speed_is_clamped() {
        let mut engine = engine();
        assert_eq!(engine.set_iterations_per_second(0), 1);
        assert_eq!(engine.step_delay(), Duration::from_millis(1000));
        assert_eq!(engine.set_iterations_per_second(500), 100);
        assert_eq!(engine.step_delay(), Duration::from_millis(10));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut engine = engine();
        engine.grid_mut().set_dimension(120);
        engine.grid_mut().toggle_node(3, 3);
        engine.set_detect_oscillations(false);
        engine.set_iterations_per_second(5);

        engine.reset();

        assert!(engine.grid().is_empty());
        assert_eq!(engine.grid().dimension(), 50);
        assert!(engine.detect_oscillations());
        assert_eq!(engine.iterations_per_second(), 45);
        assert_eq!(*engine.stats(), LifeStats::default());
    }

    #[test]
    fn glider_keeps_population() {
        let mut engine = engine();
        engine.load_state(&crate::patterns::find_pattern("glider").unwrap().to_state());
        engine.start().unwrap();

        for expected in 1..=8 {
            assert_eq!(engine.step(), LifeStep::Advanced { generation: expected, population: 5 });
        }
        assert_eq!(engine.stats().max_population, 5);
        assert_eq!(engine.stats().first_corresponding_generation, 1);
        assert_eq!(engine.stats().corresponding_generation, 8);
    }
}
