// engines.rs - The steppable interface the controller drives, for both engines

use crate::error::BoxError;
use conway::{LifeEngine, LifeOutcome, LifeSnapshot, LifeState, LifeStep};
use pathfinder::{PathEngine, PathOutcome, PathSnapshot, PathStep, PathingState};
use std::fmt::Debug;
use std::time::Duration;

/// Lifecycle position shared by every engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step<Outcome> {
    Continue,
    Finished(Outcome),
}

pub trait Simulation: Send + 'static {
    type Snapshot: Debug + Clone + Send + 'static;
    type Outcome: Debug + Clone + Send + 'static;

    fn phase(&self) -> Phase;

    /// Validates the initial configuration and enters the running phase.
    /// Nothing changes on error.
    fn begin(&mut self) -> Result<(), BoxError>;

    fn pause(&mut self) -> bool;

    fn resume(&mut self) -> bool;

    fn reset(&mut self);

    fn advance(&mut self) -> Step<Self::Outcome>;

    fn snapshot(&self) -> Self::Snapshot;

    /// Sleep before the next step, read after every step.
    fn step_delay(&self) -> Duration;
}

impl Simulation for LifeEngine {
    type Snapshot = LifeSnapshot;
    type Outcome = LifeOutcome;

    fn phase(&self) -> Phase {
        match self.state() {
            LifeState::NotStarted => Phase::NotStarted,
            LifeState::Running    => Phase::Running,
            LifeState::Paused     => Phase::Paused,
            LifeState::Stabilized | LifeState::Oscillating | LifeState::Extinct => Phase::Finished,
        }
    }

    fn begin(&mut self) -> Result<(), BoxError> {
        LifeEngine::start(self).map_err(Into::into)
    }

    fn pause(&mut self) -> bool {
        LifeEngine::pause(self)
    }

    fn resume(&mut self) -> bool {
        LifeEngine::resume(self)
    }

    fn reset(&mut self) {
        LifeEngine::reset(self)
    }

    fn advance(&mut self) -> Step<LifeOutcome> {
        match LifeEngine::step(self) {
            LifeStep::Advanced { .. } => Step::Continue,
            LifeStep::Finished(outcome) => Step::Finished(outcome),
        }
    }

    fn snapshot(&self) -> LifeSnapshot {
        LifeEngine::snapshot(self)
    }

    fn step_delay(&self) -> Duration {
        LifeEngine::step_delay(self)
    }
}

impl Simulation for PathEngine {
    type Snapshot = PathSnapshot;
    type Outcome = PathOutcome;

    fn phase(&self) -> Phase {
        match self.state() {
            PathingState::NotStarted => Phase::NotStarted,
            PathingState::Running    => Phase::Running,
            PathingState::Paused     => Phase::Paused,
            PathingState::PathFound | PathingState::PathNotFound => Phase::Finished,
        }
    }

    fn begin(&mut self) -> Result<(), BoxError> {
        PathEngine::start(self).map_err(Into::into)
    }

    fn pause(&mut self) -> bool {
        PathEngine::pause(self)
    }

    fn resume(&mut self) -> bool {
        PathEngine::resume(self)
    }

    fn reset(&mut self) {
        PathEngine::reset(self)
    }

    fn advance(&mut self) -> Step<PathOutcome> {
        match PathEngine::step(self) {
            PathStep::Expanded(_) => Step::Continue,
            PathStep::Finished(outcome) => Step::Finished(outcome),
        }
    }

    fn snapshot(&self) -> PathSnapshot {
        PathEngine::snapshot(self)
    }

    fn step_delay(&self) -> Duration {
        PathEngine::step_delay(self)
    }
}
