use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Cannot draw {requested} items from a universe of {available}")]
    InvalidSampleSize { requested: usize, available: usize },
    #[error("Monte Carlo run needs at least one iteration")]
    InvalidIterationCount,
    #[error("A pack-duplicate run needs at least one pack")]
    InvalidPackCount,
    #[error("A game needs at least one guess")]
    InvalidGuessLimit,
}

pub type Result<T> = std::result::Result<T, SimulationError>;
