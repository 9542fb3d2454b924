//! Integration tests for the command-line flow and settings persistence.

use std::path::Path;

use clap::Parser;
use monty_hall::app::{run, EXIT_OK, EXIT_USAGE};
use monty_hall::cli::Cli;
use monty_hall::i18n::Language;
use monty_hall::settings::Settings;

fn cli(config: &Path, args: &[&str]) -> Cli {
    let config = config.to_str().unwrap();
    let argv = ["monty-hall", "--config", config, "--no-color"]
        .into_iter()
        .chain(args.iter().copied());
    Cli::try_parse_from(argv).unwrap()
}

fn run_to_string(cli: &Cli) -> (u8, String) {
    let mut out = Vec::new();
    let status = run(cli, &mut out, !cli.no_color).unwrap();
    (status, String::from_utf8(out).unwrap())
}

// =============================================================================
// Exit status and output
// =============================================================================

#[test]
fn test_help_when_no_trials() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    let (status, out) = run_to_string(&cli(&config, &["-L", "en"]));

    assert_eq!(status, EXIT_OK);
    assert!(out.contains("Welcome to the Monty Hall Simulator!"));
    assert!(out.contains("pt, en, es, de, fr, ko, zh, ja"));
}

#[test]
fn test_successful_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    let (status, out) = run_to_string(&cli(&config, &["-L", "en", "--seed", "4", "3000"]));

    assert_eq!(status, EXIT_OK);
    assert!(out.starts_with("🎲 Running 3000 simulations for each strategy..."));
    assert!(out.contains("🎯 Monty Hall Paradox Results"));
    assert_eq!(out.matches('%').count(), 2);
}

#[test]
fn test_seeded_runs_match() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    let args = ["-L", "en", "--seed", "21", "500"];

    let (_, first) = run_to_string(&cli(&config, &args));
    let (_, second) = run_to_string(&cli(&config, &args));

    assert_eq!(first, second);
}

#[test]
fn test_parallel_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    let (status, out) = run_to_string(&cli(&config, &["-L", "en", "--parallel", "20000"]));

    assert_eq!(status, EXIT_OK);
    assert!(out.contains("Switching door"));
}

#[test]
fn test_invalid_trial_counts() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    let message = Language::En.messages().invalid_trials;

    for bad in ["0", "-3", "abc", "2.5"] {
        let (status, out) = run_to_string(&cli(&config, &["-L", "en", bad]));
        assert_eq!(status, EXIT_USAGE, "input {bad:?}");
        assert_eq!(out.trim_end(), message, "input {bad:?}");
    }
}

#[test]
fn test_too_many_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    let (status, out) = run_to_string(&cli(&config, &["-L", "en", "10", "20"]));

    assert_eq!(status, EXIT_USAGE);
    assert_eq!(out.trim_end(), Language::En.messages().usage);
}

// =============================================================================
// Language selection and persistence
// =============================================================================

#[test]
fn test_language_flag_is_saved() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    run_to_string(&cli(&config, &["-L", "de"]));

    let saved = Settings::load(&config).unwrap();
    assert_eq!(saved.saved_language(), Some(Language::De));
}

#[test]
fn test_saved_language_is_reused() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    Settings::with_language(Language::Fr).save(&config).unwrap();

    let (_, out) = run_to_string(&cli(&config, &["0"]));

    assert_eq!(out.trim_end(), Language::Fr.messages().invalid_trials);
}

#[test]
fn test_flag_overrides_saved_language() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    Settings::with_language(Language::Fr).save(&config).unwrap();

    let (_, out) = run_to_string(&cli(&config, &["-L", "ja", "0"]));

    assert_eq!(out.trim_end(), Language::Ja.messages().invalid_trials);
    assert_eq!(
        Settings::load(&config).unwrap().saved_language(),
        Some(Language::Ja)
    );
}

#[test]
fn test_unknown_language_falls_back_to_english() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    let (_, out) = run_to_string(&cli(&config, &["-L", "xx", "0"]));

    assert_eq!(out.trim_end(), Language::En.messages().invalid_trials);
    assert_eq!(
        Settings::load(&config).unwrap().language.as_deref(),
        Some("en")
    );
}

#[test]
fn test_readable_settings_with_unknown_code_use_english() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    for content in [r#"{"language":"xx"}"#, "{}"] {
        std::fs::write(&config, content).unwrap();

        let (_, out) = run_to_string(&cli(&config, &["0"]));

        assert_eq!(out.trim_end(), Language::En.messages().invalid_trials, "{content}");
        assert_eq!(
            Settings::load(&config).unwrap().saved_language(),
            Some(Language::En)
        );
    }
}

#[test]
fn test_malformed_settings_are_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, "{ not json").unwrap();

    let (status, _) = run_to_string(&cli(&config, &["-L", "es"]));

    assert_eq!(status, EXIT_OK);
    assert!(Settings::load(&config).is_ok());
    assert!(Settings::load_or_default(&config).is_some());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("absent.json");

    assert!(Settings::load(&config).is_err());
    assert!(Settings::load_or_default(&config).is_none());
}

#[test]
fn test_settings_file_format() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    Settings::with_language(Language::Ko).save(&config).unwrap();

    let raw = std::fs::read_to_string(&config).unwrap();
    assert_eq!(raw, "{\n  \"language\": \"ko\"\n}");
}

#[test]
fn test_unwritable_settings_are_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be written as a file
    let config = dir.path().to_path_buf();

    let (status, out) = run_to_string(&cli(&config, &["-L", "en", "--seed", "1", "10"]));

    assert_eq!(status, EXIT_OK);
    assert!(out.contains("Monty Hall Paradox Results"));
}
