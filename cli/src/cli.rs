use std::path::PathBuf;

use bin_fleet_core_rs::SimulatorConfig;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Mock waste-bin monitoring dashboard")]
pub struct Cli {
    /// Built-in dashboard policy, ignored when --config-file is given
    #[arg(short, long, value_enum, default_value_t = PolicyPreset::Standard)]
    pub policy: PolicyPreset,
    /// JSON simulator configuration
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Seed for a reproducible run (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Render the dashboard and refresh it on every tick
    Run {
        /// Stop after this many timed refreshes (runs forever by default)
        #[arg(long)]
        ticks: Option<usize>,
        /// Override the policy's tick interval
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,
        /// Regenerate the collection route after every refresh
        #[arg(long)]
        route: bool,
    },
    /// Generate the collection route once
    Route {
        /// Ticks to simulate (without waiting) before routing
        #[arg(long, default_value_t = 0)]
        warmup: usize,
    },
    /// Write the current dashboard as JSON
    Snapshot {
        #[arg(long, default_value_t = 0)]
        warmup: usize,
        /// Output file (stdout by default)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyPreset {
    /// BIN-### ids, Full from 85%, refresh every 5s
    Standard,
    /// RX-#### ids, Critical from 75%, refresh every 8s
    Monitoring,
}

impl PolicyPreset {
    pub fn config(self) -> SimulatorConfig {
        match self {
            PolicyPreset::Standard => SimulatorConfig::standard(),
            PolicyPreset::Monitoring => SimulatorConfig::monitoring(),
        }
    }
}
