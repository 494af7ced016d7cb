// lib.rs - Start/pause/resume/reset for Life and path engines on a tokio task

pub mod controller;
pub mod engines;
pub mod error;
pub mod event;

pub use controller::{EngineEvent, SimulationController};
pub use engines::{Phase, Simulation, Step};
pub use error::{BoxError, ControllerError, Result};
pub use event::SimulationEvent;

pub type LifeController = SimulationController<conway::LifeEngine>;
pub type PathController = SimulationController<pathfinder::PathEngine>;
