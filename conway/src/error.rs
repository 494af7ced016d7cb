// error.rs - Errors raised by the Life engine and its state files

use grid::GridError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("place at least one node")]
    EmptyGrid,

    #[error("invalid save name: {0:?}")]
    InvalidName(String),

    #[error("not a json state file: {}", .0.display())]
    InvalidExtension(PathBuf),

    #[error("invalid grid configuration: {0}")]
    Grid(#[from] GridError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid conway state json: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
