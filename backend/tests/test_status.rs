//! Tests for fill-level classification
//!
//! Both dashboards share one classifier with different thresholds; the
//! bands must partition [0, 100] with lower-bound-inclusive boundaries.

use bin_fleet_core_rs::policy::FleetPolicy;
use bin_fleet_core_rs::{Status, StatusThresholds};
use proptest::prelude::*;
use test_case::test_case;

#[test_case(0.0, Status::Low; "empty")]
#[test_case(49.9, Status::Low; "just below medium")]
#[test_case(50.0, Status::Medium; "medium boundary")]
#[test_case(84.99, Status::Medium; "just below full")]
#[test_case(85.0, Status::Full; "full boundary")]
#[test_case(100.0, Status::Full; "brim")]
fn test_standard_bands(fill: f64, expected: Status) {
    assert_eq!(FleetPolicy::standard().classify(fill), expected);
}

#[test_case(0.0, Status::Low; "empty")]
#[test_case(49.9, Status::Low; "just below medium")]
#[test_case(50.0, Status::Medium; "medium boundary")]
#[test_case(74.9, Status::Medium; "just below critical")]
#[test_case(75.0, Status::Full; "critical boundary")]
#[test_case(80.0, Status::Full; "critical")]
fn test_monitoring_bands(fill: f64, expected: Status) {
    assert_eq!(FleetPolicy::monitoring().classify(fill), expected);
}

#[test]
fn test_same_fill_differs_between_policies() {
    // 80% is Medium on the standard dashboard but Critical on monitoring
    assert_eq!(FleetPolicy::standard().classify(80.0), Status::Medium);
    assert_eq!(FleetPolicy::monitoring().classify(80.0), Status::Full);
}

#[test]
fn test_top_band_labels() {
    assert_eq!(FleetPolicy::standard().style.label(Status::Full), "Full");
    assert_eq!(FleetPolicy::monitoring().style.label(Status::Full), "Critical");
}

#[test]
fn test_scenario_three_bins_standard() {
    let policy = FleetPolicy::standard();
    let statuses: Vec<Status> = [10.0, 60.0, 90.0].iter().map(|&f| policy.classify(f)).collect();
    assert_eq!(statuses, vec![Status::Low, Status::Medium, Status::Full]);
}

proptest! {
    #[test]
    fn prop_bands_partition_range(fill in 0.0f64..=100.0, full_from in 51.0f64..=100.0) {
        let thresholds = StatusThresholds::new(50.0, full_from);
        let status = thresholds.classify(fill);

        let in_low = fill < 50.0;
        let in_medium = (50.0..full_from).contains(&fill);
        let in_full = fill >= full_from;

        // exactly one band holds
        prop_assert_eq!([in_low, in_medium, in_full].iter().filter(|b| **b).count(), 1);
        prop_assert_eq!(status == Status::Low, in_low);
        prop_assert_eq!(status == Status::Medium, in_medium);
        prop_assert_eq!(status == Status::Full, in_full);
    }

    #[test]
    fn prop_classification_is_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        let thresholds = StatusThresholds::new(50.0, 85.0);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(thresholds.classify(lo) <= thresholds.classify(hi));
    }
}
