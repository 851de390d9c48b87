pub mod compare;
pub mod completions;
pub mod grey;
pub mod random;
pub mod report;
pub mod show;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};

use crate::config::Config;
use crate::error::{ColourError, Result};

/// mesh-colour - RGBA colour conversions
#[derive(Parser, Debug)]
#[command(name = "mesh-colour")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./mesh-colour.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show hex, CSS and HSV forms of colours
    Show(show::ShowArgs),

    /// Generate random colours
    Random(random::RandomArgs),

    /// Build a grey colour from a level
    Grey(grey::GreyArgs),

    /// Check whether two colours are equal
    Compare(compare::CompareArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Initialise `env_logger`. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Load the config for this invocation, relative to the working directory.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir().map_err(|e| ColourError::Io {
        path: PathBuf::from("."),
        message: format!("Failed to read working directory: {}", e),
    })?;

    Config::discover(explicit, &cwd)
}
