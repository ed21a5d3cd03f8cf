//! Dashboard host
//!
//! Owns the fleet snapshot and drives the simulator from a timer. Ticks are
//! synchronous and never overlap; route generation only reads the current
//! snapshot.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use bin_fleet_core_rs::{Fleet, FleetReport, RouteOutcome, Simulator};
use log::{debug, warn};
use serde::Serialize;

use crate::render;

/// Everything a refresh shows, in serializable form
#[derive(Debug, Serialize)]
pub struct DashboardSnapshot {
    pub report: FleetReport,
    pub route: RouteOutcome,
}

pub struct Dashboard<W: Write> {
    simulator: Simulator,
    fleet: Fleet,
    out: W,
    /// Regenerate the route after every refresh
    show_route: bool,
}

impl<W: Write> Dashboard<W> {
    pub fn new(mut simulator: Simulator, out: W, show_route: bool) -> Self {
        let fleet = simulator.initialize();
        Self {
            simulator,
            fleet,
            out,
            show_route,
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Advance `ticks` times without waiting or rendering
    pub fn warm_up(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.fleet = self.simulator.tick(&self.fleet);
        }
        if ticks > 0 {
            debug!("warmed up for {} ticks", ticks);
        }
    }

    /// Redraw stats, table and markers from the current snapshot
    pub fn refresh(&mut self) -> io::Result<()> {
        let report = self.simulator.report(&self.fleet);
        render::dashboard(&mut self.out, &report, self.simulator.policy())?;
        if self.show_route {
            self.generate_route()?;
        }
        self.out.flush()
    }

    /// One timer callback: tick, then redraw
    pub fn step(&mut self) -> io::Result<()> {
        self.fleet = self.simulator.tick(&self.fleet);
        self.refresh()
    }

    pub fn generate_route(&mut self) -> io::Result<()> {
        let policy = self.simulator.policy();
        match self.simulator.route_outcome(&self.fleet) {
            RouteOutcome::Drawn(route) => render::route(&mut self.out, &route),
            RouteOutcome::Skipped { message } => {
                warn!("{}", message);
                render::route_skipped(&mut self.out, policy)
            }
        }
    }

    /// Tick and render at once, then every `interval`; forever when `ticks` is `None`
    ///
    /// `ticks` counts the timed steps after the first frame.
    pub fn run(&mut self, ticks: Option<usize>, interval: Duration) -> io::Result<()> {
        self.step()?;

        let mut done = 0;
        while ticks.map_or(true, |limit| done < limit) {
            thread::sleep(interval);
            self.step()?;
            done += 1;
        }
        Ok(())
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            report: self.simulator.report(&self.fleet),
            route: self.simulator.route_outcome(&self.fleet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bin_fleet_core_rs::SimulatorConfig;

    fn dashboard(config: SimulatorConfig, show_route: bool) -> Dashboard<Vec<u8>> {
        let mut config = config;
        config.rng_seed = Some(42);
        Dashboard::new(Simulator::new(config).unwrap(), Vec::new(), show_route)
    }

    fn output(d: &Dashboard<Vec<u8>>) -> String {
        String::from_utf8(d.out.clone()).unwrap()
    }

    #[test]
    fn test_run_first_frame_is_already_ticked() {
        let mut d = dashboard(SimulatorConfig::standard(), false);
        d.run(Some(2), Duration::ZERO).unwrap();

        let text = output(&d);
        assert_eq!(text.matches("== standard dashboard").count(), 3);
        assert!(!text.contains("tick 0 =="));
        assert!(text.starts_with("== standard dashboard, tick 1 =="));
        assert!(text.contains("tick 3 =="));
    }

    #[test]
    fn test_route_rendered_or_skipped_every_refresh() {
        let mut d = dashboard(SimulatorConfig::monitoring(), true);
        d.run(Some(1), Duration::ZERO).unwrap();

        let text = output(&d);
        let drawn = text.matches("Route (").count();
        let skipped = text.matches("Not enough critical bins").count();
        assert_eq!(drawn + skipped, 2);
    }

    #[test]
    fn test_generate_route_does_not_change_fleet() {
        let mut d = dashboard(SimulatorConfig::standard(), false);
        d.warm_up(3);
        let before = d.fleet().clone();

        d.generate_route().unwrap();
        assert_eq!(d.fleet(), &before);
    }

    #[test]
    fn test_snapshot_matches_fleet() {
        let mut d = dashboard(SimulatorConfig::monitoring(), false);
        d.warm_up(5);

        let snapshot = d.snapshot();
        assert_eq!(snapshot.report.tick, 5);
        assert_eq!(snapshot.report.rows.len(), d.fleet().count());

        let value = serde_json::to_value(&snapshot).unwrap();
        assert!(value["route"]["outcome"] == "drawn" || value["route"]["outcome"] == "skipped");
    }
}
