//! Program flow from parsed arguments to rendered output.

use std::io::Write;

use tracing::{info, instrument, warn};

use crate::cli::{Cli, Request};
use crate::core::SimulationConfig;
use crate::engine::Comparison;
use crate::error::InputError;
use crate::i18n::detect_system_language;
use crate::render;
use crate::settings::{resolve_language, Settings};

/// Exit status for a successful run or the help screen.
pub const EXIT_OK: u8 = 0;

/// Exit status for invalid arguments.
pub const EXIT_USAGE: u8 = 1;

/// Run the program, writing user-facing output to `out`.
///
/// Returns the process exit status. Settings problems are logged and never
/// fatal; only failures to write `out` become errors.
#[instrument(skip(cli, out), fields(config = %cli.config.display()))]
pub fn run(cli: &Cli, out: &mut dyn Write, color: bool) -> anyhow::Result<u8> {
    let saved = Settings::load_or_default(&cli.config);
    let language = resolve_language(
        cli.language.as_deref(),
        saved.as_ref(),
        detect_system_language,
    );
    info!(%language, "interface language selected");
    let messages = language.messages();

    if let Err(e) = Settings::with_language(language).save(&cli.config) {
        warn!(error = %e, "could not save settings");
    }

    let trials = match cli.request() {
        Ok(Request::Help) => {
            writeln!(out, "{}", render::help(messages, color))?;
            return Ok(EXIT_OK);
        }
        Ok(Request::Run(trials)) => trials,
        Err(e @ InputError::TooManyArguments { .. }) => {
            info!(error = %e, "rejected arguments");
            writeln!(out, "{}", messages.usage)?;
            return Ok(EXIT_USAGE);
        }
        Err(e) => {
            info!(error = %e, "rejected trial count");
            writeln!(out, "{}", messages.invalid_trials)?;
            return Ok(EXIT_USAGE);
        }
    };

    writeln!(out, "{}\n", messages.running_sim(trials))?;

    let mut config = SimulationConfig::new(trials).with_parallel(cli.parallel);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let comparison = Comparison::run(&config);
    info!(
        seed = comparison.seed,
        switch_wins = comparison.switch.wins(),
        stay_wins = comparison.stay.wins(),
        "simulation complete"
    );

    writeln!(out, "{}", render::results(&comparison, messages, color))?;
    Ok(EXIT_OK)
}
