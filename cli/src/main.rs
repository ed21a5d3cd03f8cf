use std::time::Duration;

use anyhow::{Context, Result};
use bin_fleet_core_rs::Simulator;
use clap::Parser as ClapParser;
use log::{info, warn};

use crate::cli::{Cli, Command};
use crate::host::Dashboard;

mod cli;
mod host;
mod io;
mod render;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            info!("[MAIN] No config file provided, using the {:?} policy", args.policy);
            args.policy.config()
        }
        Some(path) => io::read_config(path)?,
    };
    if let Some(seed) = args.seed {
        config.rng_seed = Some(seed);
    }
    if config.rng_seed.is_none() {
        warn!("[MAIN] No seed provided, the run will not be reproducible");
    }

    let interval = config.tick_interval();
    let simulator = Simulator::new(config).context("invalid simulator configuration")?;

    let stdout = std::io::stdout();
    match args.command {
        Command::Run {
            ticks,
            interval_ms,
            route,
        } => {
            let interval = interval_ms.map(Duration::from_millis).unwrap_or(interval);
            let mut dashboard = Dashboard::new(simulator, stdout.lock(), route);
            dashboard.run(ticks, interval)?;
        }
        Command::Route { warmup } => {
            let mut dashboard = Dashboard::new(simulator, stdout.lock(), false);
            dashboard.warm_up(warmup);
            info!("routing over {} bins", dashboard.fleet().count());
            dashboard.generate_route()?;
        }
        Command::Snapshot { warmup, output } => {
            let mut dashboard = Dashboard::new(simulator, std::io::sink(), false);
            dashboard.warm_up(warmup);
            io::write_json(&dashboard.snapshot(), output.as_deref())?;
        }
    }

    Ok(())
}
