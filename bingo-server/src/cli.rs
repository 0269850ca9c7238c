//! Command-line arguments
//!
//! Every flag can also come from the environment; both take priority over the
//! TOML config file.

use bingo_common::config::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for bingo-server
#[derive(Parser, Debug)]
#[command(name = "bingo-server")]
#[command(about = "Bingo card generator and phrase store")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "BINGO_HOST")]
    pub host: Option<String>,

    /// SQLite database file holding the phrase pool
    #[arg(short, long, env = "BINGO_DATABASE")]
    pub database: Option<PathBuf>,

    /// Directory containing the built client
    #[arg(long, env = "BINGO_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// JSON phrase list imported when the store is empty
    #[arg(long, env = "BINGO_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "BINGO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// TOML config file
    #[arg(short, long, env = "BINGO_CONFIG")]
    pub config: Option<PathBuf>,
}

impl From<Args> for ConfigOverrides {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            database: args.database,
            static_dir: args.static_dir,
            seed_file: args.seed_file,
            log_level: args.log_level,
            config_file: args.config,
        }
    }
}
