//! Text rendering of dashboard reports
//!
//! Every function here is a pure read of a report; writers are generic so
//! tests can render into a buffer.

use std::io::{self, Write};

use bin_fleet_core_rs::policy::FleetPolicy;
use bin_fleet_core_rs::{FleetReport, RouteReport, Status};
use jiff::tz::TimeZone;
use jiff::Timestamp;

/// Wall-clock time in the local zone, like a browser's `toLocaleTimeString`
pub fn local_time(ts: Timestamp) -> String {
    ts.to_zoned(TimeZone::system()).strftime("%H:%M:%S").to_string()
}

/// Whole percentages print bare, everything else with one decimal
pub fn fill(fill_level: f64) -> String {
    if fill_level.fract() == 0.0 {
        format!("{:.0}%", fill_level)
    } else {
        format!("{:.1}%", fill_level)
    }
}

pub fn table<W: Write>(out: &mut W, report: &FleetReport) -> io::Result<()> {
    writeln!(out, "{:<10} {:>7}  {:<9} {}", "BIN", "FILL", "STATUS", "UPDATED")?;
    for row in &report.rows {
        writeln!(
            out,
            "{:<10} {:>7}  {:<9} {}",
            row.id,
            fill(row.fill_level),
            row.status_label,
            local_time(row.last_updated)
        )?;
    }
    Ok(())
}

pub fn stats<W: Write>(out: &mut W, report: &FleetReport, policy: &FleetPolicy) -> io::Result<()> {
    let s = &report.stats;
    writeln!(
        out,
        "Total: {} | {}: {} | {}: {} | {}: {} | Avg fill: {}%",
        s.total,
        policy.style.label(Status::Full),
        s.full,
        policy.style.label(Status::Medium),
        s.medium,
        policy.style.label(Status::Low),
        s.low,
        s.average_fill
    )
}

pub fn markers<W: Write>(out: &mut W, report: &FleetReport) -> io::Result<()> {
    for m in &report.markers {
        write!(
            out,
            "  o {} ({:.5}, {:.5}) {} {} r={}",
            m.id,
            m.position.lat,
            m.position.lng,
            fill(m.fill_level),
            m.color,
            m.radius
        )?;
        if let (Some(priority), Some(hours)) = (m.priority, m.predicted_overflow_hours) {
            write!(out, " priority {}/10, overflow in {}h", priority, hours)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One full dashboard refresh: header, stats, table and markers
pub fn dashboard<W: Write>(out: &mut W, report: &FleetReport, policy: &FleetPolicy) -> io::Result<()> {
    writeln!(out, "== {} dashboard, tick {} ==", report.policy, report.tick)?;
    stats(out, report, policy)?;
    table(out, report)?;
    markers(out, report)?;
    writeln!(out)
}

pub fn route<W: Write>(out: &mut W, route: &RouteReport) -> io::Result<()> {
    let b = &route.bounds;
    writeln!(
        out,
        "Route ({}, {} stops, {:.2} km): {}",
        route.color,
        route.stops.len(),
        route.distance_km,
        route.stops.join(" -> ")
    )?;
    writeln!(
        out,
        "  fit bounds: S {:.5} W {:.5} N {:.5} E {:.5}",
        b.south, b.west, b.north, b.east
    )?;
    let impact = &route.impact;
    writeln!(
        out,
        "  impact vs {:.2} km fixed round: fuel saved {:.2} l, CO2 saved {:.2} kg",
        impact.fixed_distance_km, impact.fuel_saved_liters, impact.co2_saved_kg
    )
}

/// Notice shown instead of drawing when too few bins qualify
pub fn route_skipped<W: Write>(out: &mut W, policy: &FleetPolicy) -> io::Result<()> {
    writeln!(
        out,
        "Not enough {} bins to generate a route!",
        policy.style.label(policy.route.threshold).to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bin_fleet_core_rs::{Bin, Fleet, Position, RouteOutcome};
    use test_case::test_case;

    fn report(policy: &FleetPolicy, fills: &[f64]) -> FleetReport {
        let bins = fills
            .iter()
            .enumerate()
            .map(|(i, &f)| {
                Bin::new(
                    policy.id_format.format(i + 1),
                    Position::new(18.52, 73.85 + i as f64 * 0.001),
                    f,
                    Timestamp::UNIX_EPOCH,
                )
            })
            .collect();
        FleetReport::build(&Fleet::from_bins(bins).unwrap(), policy, 2)
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test_case(57.0, "57%")]
    #[test_case(57.3421, "57.3%")]
    #[test_case(100.0, "100%")]
    fn test_fill_format(level: f64, expected: &str) {
        assert_eq!(fill(level), expected);
    }

    #[test]
    fn test_stats_use_policy_labels() {
        let policy = FleetPolicy::monitoring();
        let r = report(&policy, &[10.0, 60.0, 90.0]);
        let text = render(|out| stats(out, &r, &policy));
        assert_eq!(text, "Total: 3 | Critical: 1 | Medium: 1 | Low: 1 | Avg fill: 53%\n");
    }

    #[test]
    fn test_table_has_header_and_one_line_per_bin() {
        let policy = FleetPolicy::standard();
        let r = report(&policy, &[10.0, 60.0, 90.0]);
        let text = render(|out| table(out, &r));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("BIN"));
        assert!(lines[1].starts_with("BIN-001"));
        assert!(lines[3].contains("Full"));
    }

    #[test]
    fn test_markers_show_popup_attributes_when_present() {
        let policy = FleetPolicy::standard();
        let r = report(&policy, &[95.0]);
        let text = render(|out| markers(out, &r));
        assert!(text.contains("BIN-001"));
        assert!(text.contains("red r=10"));
        assert!(!text.contains("priority"));
    }

    #[test]
    fn test_route_line() {
        let policy = FleetPolicy::standard();
        let bins = vec![
            Bin::new("BIN-001", Position::new(0.0, 0.0), 90.0, Timestamp::UNIX_EPOCH),
            Bin::new("BIN-002", Position::new(0.0, 1.0), 95.0, Timestamp::UNIX_EPOCH),
        ];
        let fleet = Fleet::from_bins(bins).unwrap();
        let outcome = RouteOutcome::from_result(
            &bin_fleet_core_rs::select_route_candidates(
                &fleet,
                &policy.thresholds,
                policy.route.threshold,
                policy.route.max_stops,
            ),
            &policy,
        );

        let RouteOutcome::Drawn(drawn) = outcome else {
            panic!("expected a route");
        };
        let text = render(|out| route(out, &drawn));
        assert!(text.starts_with("Route (blue, 2 stops, 111.19 km): BIN-001 -> BIN-002"));
        assert!(text.contains("impact vs 20.00 km fixed round: fuel saved -18.24 l, CO2 saved -41.95 kg"));
    }

    #[test]
    fn test_skipped_notice_names_the_band() {
        assert_eq!(
            render(|out| route_skipped(out, &FleetPolicy::standard())),
            "Not enough full bins to generate a route!\n"
        );
        assert_eq!(
            render(|out| route_skipped(out, &FleetPolicy::monitoring())),
            "Not enough critical bins to generate a route!\n"
        );
    }
}
