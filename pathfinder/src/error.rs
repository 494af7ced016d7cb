// error.rs - Invalid start/goal placement for a search

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("start node not set")]
    MissingStart,

    #[error("goal node not set")]
    MissingGoal,

    #[error("expected one start node, found {0}")]
    MultipleStarts(usize),

    #[error("expected one goal node, found {0}")]
    MultipleGoals(usize),

    #[error("invalid grid configuration: {0}")]
    Grid(#[from] grid::GridError),

    #[error("invalid path config json: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PathError>;
