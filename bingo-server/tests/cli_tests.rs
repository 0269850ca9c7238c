//! Command-line and environment argument tests
//!
//! Uses serial_test: tests that set environment variables run one at a time.

use bingo_common::config::ConfigOverrides;
use bingo_server::cli::Args;
use clap::Parser;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_env() {
    for var in [
        "PORT",
        "BINGO_HOST",
        "BINGO_DATABASE",
        "BINGO_STATIC_DIR",
        "BINGO_SEED_FILE",
        "BINGO_LOG_LEVEL",
        "BINGO_CONFIG",
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_no_arguments_leaves_everything_unset() {
    clear_env();
    let overrides = ConfigOverrides::from(Args::try_parse_from(["bingo-server"]).unwrap());
    assert_eq!(overrides.port, None);
    assert_eq!(overrides.database, None);
    assert_eq!(overrides.config_file, None);
}

#[test]
#[serial]
fn test_cli_arguments() {
    clear_env();
    let args = Args::try_parse_from([
        "bingo-server",
        "--port",
        "4100",
        "--database",
        "/tmp/bingo.db",
        "--seed-file",
        "phrases.json",
        "--config",
        "bingo.toml",
    ])
    .unwrap();
    let overrides = ConfigOverrides::from(args);
    assert_eq!(overrides.port, Some(4100));
    assert_eq!(overrides.database, Some(PathBuf::from("/tmp/bingo.db")));
    assert_eq!(overrides.seed_file, Some(PathBuf::from("phrases.json")));
    assert_eq!(overrides.config_file, Some(PathBuf::from("bingo.toml")));
}

#[test]
#[serial]
fn test_port_from_environment() {
    clear_env();
    env::set_var("PORT", "4300");
    let args = Args::try_parse_from(["bingo-server"]).unwrap();
    clear_env();
    assert_eq!(args.port, Some(4300));
}

#[test]
#[serial]
fn test_cli_beats_environment() {
    clear_env();
    env::set_var("PORT", "4300");
    env::set_var("BINGO_LOG_LEVEL", "debug");
    let args = Args::try_parse_from(["bingo-server", "-p", "4400"]).unwrap();
    clear_env();
    assert_eq!(args.port, Some(4400));
    assert_eq!(args.log_level.as_deref(), Some("debug"));
}

#[test]
#[serial]
fn test_invalid_port_rejected() {
    clear_env();
    assert!(Args::try_parse_from(["bingo-server", "--port", "not-a-port"]).is_err());
}
