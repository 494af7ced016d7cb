// error.rs - Rejected controller commands

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("a simulation is already active")]
    AlreadyActive,

    #[error("simulation is not running")]
    NotRunning,

    #[error("simulation is not paused")]
    NotPaused,

    #[error("cannot start simulation: {0}")]
    Configuration(#[source] BoxError),
}

pub type Result<T> = std::result::Result<T, ControllerError>;
