pub mod aggregate;
pub mod algo;
pub mod config;
pub mod data;
pub mod error;
pub mod sampler;
pub mod structs;
pub mod trials;

pub use error::{Result, SimulationError};
