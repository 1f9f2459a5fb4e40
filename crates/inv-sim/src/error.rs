use inv_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    World(#[from] WorldError),
}

pub type SimResult<T> = Result<T, SimError>;
