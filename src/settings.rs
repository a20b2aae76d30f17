//! Command-line settings
//!
//! Two positional values drive the run: how many missiles may be in flight
//! and how often a new one may launch.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Message printed when a positional argument is missing
pub const MISSING_ARGS_MESSAGE: &str = "Missing num missiles and/or timer args.";

#[derive(Debug, Parser)]
#[command(name = "navex", version, about = "Dodge homing missiles fired from four corner towers")]
struct CliArgs {
    /// Maximum number of missiles in flight at once.
    #[arg(value_name = "MAX_MISSILES")]
    max_missiles: u32,
    /// Milliseconds between missile launches.
    #[arg(value_name = "MISSILE_INTERVAL_MS")]
    missile_interval_ms: u64,
    /// Seed for obstacle placement and missile origins (random if omitted).
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// TrueType font for the score text (built-in font if omitted).
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,
}

/// Parameters the simulation needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Maximum missiles in flight
    pub max_missiles: u32,
    /// Minimum time between missile spawns (milliseconds)
    pub missile_interval_ms: u64,
}

/// Everything the game needs from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub sim: SimConfig,
    /// Fixed RNG seed, if requested
    pub seed: Option<u64>,
    /// Custom score font
    pub font: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from an argument list (first item is the program name)
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = CliArgs::try_parse_from(args)?;
        Ok(Self {
            sim: SimConfig {
                max_missiles: cli.max_missiles,
                missile_interval_ms: cli.missile_interval_ms,
            },
            seed: cli.seed,
            font: cli.font,
        })
    }

    /// Seed to use for this run
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// Whether a parse failure is a missing positional argument
pub fn is_missing_argument(err: &clap::Error) -> bool {
    err.kind() == clap::error::ErrorKind::MissingRequiredArgument
}
