//! Monte Carlo engine for the three-door game.
//!
//! - [`trial`]: one game (deal, host reveal, final choice)
//! - [`simulation`]: repeated trials, win counts, strategy comparison
//! - [`parallel`]: chunked sweeps on the rayon pool

pub mod parallel;
pub mod simulation;
pub mod trial;

pub use parallel::run_simulation_parallel;
pub use simulation::{run_simulation, simulate, Comparison, SimulationResult};
pub use trial::{run_trial, Trial};
