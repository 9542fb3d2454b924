//! Core value types: doors, strategies, the random source, configuration.
//!
//! Everything here is a plain value. The engine composes these and never
//! holds state across runs.

pub mod config;
pub mod door;
pub mod rng;
pub mod strategy;

pub use config::{SimulationConfig, DEFAULT_CHUNK_SIZE};
pub use door::{Door, DOOR_COUNT};
pub use rng::SimRng;
pub use strategy::Strategy;
