//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::error::InputError;
use crate::settings::DEFAULT_SETTINGS_FILE;

/// Monty Hall - compare switching and staying by simulation
#[derive(Parser, Debug)]
#[command(name = "monty-hall")]
#[command(about = "Simulates the Monty Hall paradox", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Interface language (pt, en, es, de, fr, ko, zh, ja); saved for future runs
    #[arg(short = 'L', long = "lang", value_name = "CODE")]
    pub language: Option<String>,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Split trials across all CPU cores
    #[arg(long)]
    pub parallel: bool,

    /// Path to the settings file
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Number of trials per strategy
    #[arg(value_name = "TRIALS", allow_negative_numbers = true)]
    pub trials: Vec<String>,
}

/// What the positional arguments ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// No trial count: show the help screen.
    Help,
    /// Run this many trials per strategy.
    Run(u64),
}

impl Cli {
    /// Classify the positional arguments.
    pub fn request(&self) -> Result<Request, InputError> {
        match self.trials.as_slice() {
            [] => Ok(Request::Help),
            [trials] => parse_trials(trials).map(Request::Run),
            more => Err(InputError::TooManyArguments { count: more.len() }),
        }
    }
}

/// Parse a trial count, accepting only positive integers.
pub fn parse_trials(input: &str) -> Result<u64, InputError> {
    let value: i64 = input.trim().parse().map_err(|_| InputError::NotAnInteger {
        input: input.to_string(),
    })?;
    u64::try_from(value)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(InputError::NotPositive { value })
}
