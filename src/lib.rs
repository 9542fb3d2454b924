//! # monty-hall
//!
//! A Monte Carlo simulator for the Monty Hall problem.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: Every engine function takes `&mut R where
//!    R: Rng`. There is no global generator; [`SimRng`] gives seeded,
//!    reproducible streams.
//!
//! 2. **Unbiased host**: The host's door is drawn by uniform rejection
//!    sampling, never by scanning doors in order.
//!
//! 3. **Independent sweeps**: Switch and Stay each draw from their own
//!    stream, so their results are separate experiments.
//!
//! ## Modules
//!
//! - `core`: Doors, strategies, RNG, configuration
//! - `engine`: Trials, simulations, parallel sweeps
//! - `i18n`: Languages, string tables, locale detection
//! - `settings`: Persisted language choice
//! - `render`: Help screen and results box
//! - `cli`, `app`: Argument parsing and program flow
//!
//! ```
//! use monty_hall::{run_simulation, SimRng, Strategy};
//!
//! let mut rng = SimRng::new(42);
//! let wins = run_simulation(10_000, Strategy::Switch, &mut rng);
//! assert!(wins > 6_000 && wins < 7_300);
//! ```

pub mod app;
pub mod cli;
pub mod core;
pub mod engine;
pub mod error;
pub mod i18n;
pub mod render;
pub mod settings;

// Re-export commonly used types
pub use crate::core::{Door, SimRng, SimulationConfig, Strategy, DOOR_COUNT};

pub use crate::engine::{
    run_simulation, run_simulation_parallel, run_trial, simulate, Comparison, SimulationResult,
    Trial,
};

pub use crate::cli::{Cli, Request};
pub use crate::error::{InputError, SettingsError};
pub use crate::i18n::{Language, Messages};
pub use crate::settings::Settings;
