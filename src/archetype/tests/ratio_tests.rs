//! Tests for zone share ratios

use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_ratios_from_named_zones() {
    let rows = create_zones(&[
        (zones::LOW_SLOT, 50),
        (zones::HIGH_SLOT, 30),
        (zones::CREASE, 10),
        (zones::L_NET_SIDE, 5),
        (zones::R_NET_SIDE, 5),
        (zones::L_POINT, 12),
        (zones::R_POINT, 8),
        (zones::CENTER_POINT, 5),
        (zones::L_CIRCLE, 15),
        (zones::R_CIRCLE, 25),
        (zones::L_CORNER, 2),
        (zones::R_CORNER, 1),
        (zones::BEHIND_THE_NET, 2),
        (zones::OUTSIDE_L, 3),
        (zones::OUTSIDE_R, 3),
        (zones::BEYOND_RED_LINE, 2),
        (zones::OFFENSIVE_NEUTRAL_ZONE, 2),
    ]);
    let all = totals(Position::All, 200, 20);
    let forwards = totals(Position::Forwards, 150, 16);
    let defense = totals(Position::Defense, 50, 4);

    let ratios = ZoneRatios::compute(&rows, &all, Some(&forwards), Some(&defense));

    assert!(approx(ratios.high_danger, 70.0 / 200.0));
    assert!(approx(ratios.point_share, 25.0 / 200.0));
    assert!(approx(ratios.circle_share, 40.0 / 200.0));
    assert!(approx(ratios.net_front, 20.0 / 200.0));
    assert!(approx(ratios.corner_share, 5.0 / 200.0));
    assert!(approx(ratios.crease_rate, 10.0 / 200.0));
    assert!(approx(ratios.low_slot_rate, 50.0 / 200.0));
    assert!(approx(ratios.slot_share, 80.0 / 200.0));
    assert!(approx(ratios.perimeter_share, 10.0 / 200.0));
    assert!(approx(ratios.def_ratio.unwrap(), 0.25));
}

#[test]
fn test_missing_zones_contribute_zero() {
    let rows = create_zones(&[(zones::CREASE, 20)]);
    let all = totals(Position::All, 100, 5);

    let ratios = ZoneRatios::compute(&rows, &all, None, None);

    assert!(approx(ratios.crease_rate, 0.2));
    assert!(approx(ratios.high_danger, 0.2));
    assert!(approx(ratios.net_front, 0.2));
    assert_eq!(ratios.low_slot_rate, 0.0);
    assert_eq!(ratios.point_share, 0.0);
    assert_eq!(ratios.corner_share, 0.0);
}

#[test]
fn test_zero_total_uses_unit_divisor() {
    let rows = create_zones(&[(zones::LOW_SLOT, 0), (zones::CREASE, 0)]);
    let all = totals(Position::All, 0, 0);

    let ratios = ZoneRatios::compute(&rows, &all, None, None);

    assert_eq!(ratios.high_danger, 0.0);
    assert!(ratios.high_danger.is_finite());
    assert!(ratios.low_slot_rate.is_finite());
}

#[test]
fn test_def_ratio_absent_without_skater_shots() {
    let rows = create_zones(&[(zones::LOW_SLOT, 10)]);
    let all = totals(Position::All, 10, 1);
    let zero_f = totals(Position::Forwards, 0, 0);
    let zero_d = totals(Position::Defense, 0, 0);

    assert!(ZoneRatios::compute(&rows, &all, None, None).def_ratio.is_none());
    assert!(
        ZoneRatios::compute(&rows, &all, Some(&zero_f), Some(&zero_d))
            .def_ratio
            .is_none()
    );

    // Only defense shots recorded
    let d_only = totals(Position::Defense, 10, 1);
    let ratios = ZoneRatios::compute(&rows, &all, None, Some(&d_only));
    assert_eq!(ratios.def_ratio, Some(1.0));
}

#[test]
fn test_duplicate_zone_rows_use_first() {
    let mut rows = create_zones(&[(zones::CREASE, 10)]);
    rows.push(zone(zones::CREASE, 90, 0));
    let all = totals(Position::All, 100, 1);

    let ratios = ZoneRatios::compute(&rows, &all, None, None);
    assert!(approx(ratios.crease_rate, 0.1));
}
