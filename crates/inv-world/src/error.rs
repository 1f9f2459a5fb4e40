//! World-model error type.

use thiserror::Error;

use inv_core::CityId;

/// Errors produced by `inv-world`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("malformed map at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("cannot seed {requested} aliens: only {available} free city slots")]
    InsufficientCapacity { requested: usize, available: usize },

    #[error("city {0} does not exist")]
    UnknownCity(CityId),

    #[error("no alien has a road to a city with room")]
    NoMovePossible,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
