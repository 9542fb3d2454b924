//! Repeated trials and their aggregate results.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::parallel::run_simulation_parallel;
use super::trial::run_trial;
use crate::core::{SimRng, SimulationConfig, Strategy};

/// Play `trials` independent games under `strategy` and count the wins.
///
/// `trials == 0` yields 0.
#[instrument(skip(rng))]
pub fn run_simulation<R: Rng + ?Sized>(trials: u64, strategy: Strategy, rng: &mut R) -> u64 {
    let wins = (0..trials)
        .filter(|_| run_trial(strategy, &mut *rng))
        .fold(0u64, |n, _| n + 1);
    debug!(wins, "simulation finished");
    wins
}

/// Like [`run_simulation`], but keeps the inputs alongside the count.
pub fn simulate<R: Rng + ?Sized>(trials: u64, strategy: Strategy, rng: &mut R) -> SimulationResult {
    SimulationResult::new(strategy, trials, run_simulation(trials, strategy, rng))
}

/// Outcome of one strategy sweep.
///
/// Always holds `wins <= trials`; deserialization rejects anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawResult")]
pub struct SimulationResult {
    strategy: Strategy,
    trials: u64,
    wins: u64,
}

/// Unchecked wire form of [`SimulationResult`].
#[derive(Deserialize)]
struct RawResult {
    strategy: Strategy,
    trials: u64,
    wins: u64,
}

impl TryFrom<RawResult> for SimulationResult {
    type Error = String;

    fn try_from(raw: RawResult) -> Result<Self, Self::Error> {
        if raw.wins > raw.trials {
            return Err(format!("{} wins out of {} trials", raw.wins, raw.trials));
        }
        Ok(Self {
            strategy: raw.strategy,
            trials: raw.trials,
            wins: raw.wins,
        })
    }
}

impl SimulationResult {
    /// Create a result. Wins are clamped to `trials`.
    #[must_use]
    pub fn new(strategy: Strategy, trials: u64, wins: u64) -> Self {
        debug_assert!(wins <= trials, "{wins} wins out of {trials} trials");
        Self {
            strategy,
            trials,
            wins: wins.min(trials),
        }
    }

    /// Strategy that was simulated.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of games played.
    #[must_use]
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Number of games won.
    #[must_use]
    pub fn wins(&self) -> u64 {
        self.wins
    }

    /// Number of games lost.
    #[must_use]
    pub fn losses(&self) -> u64 {
        self.trials.saturating_sub(self.wins)
    }

    /// Wins as a fraction in `[0, 1]`; 0 when no trials were run.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.wins as f64 / self.trials as f64
        }
    }

    /// Wins as a percentage in `[0, 100]`; 0 when no trials were run.
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        self.win_rate() * 100.0
    }
}

/// Both strategies simulated over the same number of trials.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Seed the run was derived from.
    pub seed: u64,
    /// Result for [`Strategy::Switch`].
    pub switch: SimulationResult,
    /// Result for [`Strategy::Stay`].
    pub stay: SimulationResult,
}

impl Comparison {
    /// Run both strategies as described by `config`.
    ///
    /// Each strategy draws from its own stream derived from the seed, so the
    /// two sweeps are independent experiments rather than one paired sequence.
    #[instrument(skip(config), fields(trials = config.trials, parallel = config.parallel))]
    pub fn run(config: &SimulationConfig) -> Self {
        let root = match config.seed {
            Some(seed) => SimRng::new(seed),
            None => SimRng::from_entropy(),
        };
        info!(seed = root.seed(), "running comparison");

        let sweep = |strategy: Strategy| {
            let stream = root.for_context(strategy.stream_context());
            let wins = if config.parallel {
                run_simulation_parallel(config.trials, strategy, &stream, config.chunk_size)
            } else {
                let mut rng = stream;
                run_simulation(config.trials, strategy, &mut rng)
            };
            SimulationResult::new(strategy, config.trials, wins)
        };

        Self {
            seed: root.seed(),
            switch: sweep(Strategy::Switch),
            stay: sweep(Strategy::Stay),
        }
    }

    /// The result for `strategy`.
    #[must_use]
    pub fn result(&self, strategy: Strategy) -> &SimulationResult {
        match strategy {
            Strategy::Switch => &self.switch,
            Strategy::Stay => &self.stay,
        }
    }
}
