use analytics::{AnalyticsError, DrawdownEngine, compute_drawdown};
use core_types::{EquityCurve, EquityPoint, PointKind};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn curve(starting_balance: Decimal, points: &[(PointKind, Decimal)]) -> EquityCurve {
    let mut curve = EquityCurve::new(starting_balance);
    for &(kind, value) in points {
        curve.push(kind, value);
    }
    curve
}

#[test]
fn peak_then_low() {
    let curve = curve(
        dec!(100000),
        &[(PointKind::Peak, dec!(108000)), (PointKind::Low, dec!(101000))],
    );
    let report = DrawdownEngine::new().calculate_curve(&curve).unwrap();

    // (108000 - 101000) / 108000 * 100 = 6.4814...
    assert_eq!(report.peak_drawdown_pct.round_dp(4), dec!(6.4815));
    assert_eq!(report.worst_drawdown_pct.round_dp(4), dec!(6.4815));
    assert_eq!(report.current_balance, dec!(101000));
}

#[test]
fn empty_curve_has_nothing_to_analyze() {
    let curve = EquityCurve::new(dec!(100000));
    assert_eq!(
        DrawdownEngine::new().calculate_curve(&curve),
        Err(AnalyticsError::EmptyInput)
    );
}

#[test]
fn only_new_highs() {
    let curve = curve(
        dec!(100000),
        &[(PointKind::Peak, dec!(110000)), (PointKind::Peak, dec!(115000))],
    );
    let report = DrawdownEngine::new().calculate_curve(&curve).unwrap();
    assert!(report.peak_drawdown_pct.is_zero());
    assert!(report.worst_drawdown_pct.is_zero());
}

#[test]
fn lows_below_start_measure_from_start() {
    let curve = curve(
        dec!(100000),
        &[(PointKind::Low, dec!(90000)), (PointKind::Low, dec!(95000))],
    );
    let report = DrawdownEngine::new().calculate_curve(&curve).unwrap();

    // 95000 never exceeds the starting peak, so the peak stays at 100000.
    assert_eq!(report.worst_drawdown_pct, dec!(10));
    assert_eq!(report.peak_drawdown_pct, dec!(10));
    assert_eq!(report.current_balance, dec!(95000));
}

#[test]
fn low_tagged_new_high_becomes_the_peak() {
    let curve = curve(
        dec!(100000),
        &[
            (PointKind::Low, dec!(90000)),
            (PointKind::Low, dec!(125000)),
            (PointKind::Low, dec!(100000)),
        ],
    );
    let report = DrawdownEngine::new().calculate_curve(&curve).unwrap();

    // Peak moved to 125000: (125000 - 100000) / 125000 = 20%.
    assert_eq!(report.worst_drawdown_pct, dec!(20));
    assert_eq!(report.peak_drawdown_pct, dec!(20));
}

#[test]
fn recovery_does_not_erase_worst_drawdown() {
    let curve = curve(
        dec!(1000),
        &[
            (PointKind::Peak, dec!(1200)),
            (PointKind::Low, dec!(900)),
            (PointKind::Peak, dec!(1300)),
            (PointKind::Low, dec!(1250)),
        ],
    );
    let report = DrawdownEngine::new().calculate_curve(&curve).unwrap();
    assert_eq!(report.worst_drawdown_pct, dec!(25));
    assert_eq!(report.peak_drawdown_pct, dec!(25));
    assert_eq!(report.current_balance, dec!(1250));
}

#[test]
fn editing_the_curve_changes_the_result() {
    let mut curve = EquityCurve::default();
    let low = curve.points()[1].id;

    curve.update_point(low, dec!(97200)).unwrap();
    let report = DrawdownEngine::new().calculate_curve(&curve).unwrap();
    assert_eq!(report.worst_drawdown_pct, dec!(10));

    curve.remove_point(low).unwrap();
    let report = DrawdownEngine::new().calculate_curve(&curve).unwrap();
    assert!(report.worst_drawdown_pct.is_zero());
    assert_eq!(report.current_balance, dec!(108000));
}

fn arb_points() -> impl Strategy<Value = Vec<(bool, u32)>> {
    prop::collection::vec((any::<bool>(), 0u32..1_000_000), 1..40)
}

fn to_points(raw: &[(bool, u32)]) -> Vec<EquityPoint> {
    raw.iter()
        .map(|&(is_peak, cents)| {
            let value = Decimal::new(i64::from(cents), 2);
            if is_peak {
                EquityPoint::peak(value)
            } else {
                EquityPoint::low(value)
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn percentages_stay_in_range(start in 1u32..1_000_000, raw in arb_points()) {
        let points = to_points(&raw);
        let report = compute_drawdown(Decimal::new(i64::from(start), 2), &points).unwrap();

        prop_assert!(report.peak_drawdown_pct >= Decimal::ZERO);
        prop_assert!(report.peak_drawdown_pct <= dec!(100));
        prop_assert!(report.worst_drawdown_pct >= Decimal::ZERO);
        prop_assert!(report.worst_drawdown_pct <= dec!(100));
        prop_assert!(report.worst_drawdown_pct <= report.peak_drawdown_pct);
        prop_assert_eq!(report.current_balance, points.last().unwrap().value);
    }

    #[test]
    fn deeper_low_raises_worst_drawdown(start in 1u32..1_000_000, raw in arb_points()) {
        let start = Decimal::new(i64::from(start), 2);
        let mut points = to_points(&raw);
        let before = compute_drawdown(start, &points).unwrap();

        // Every point is bounded by the running peak, so a zero is always the
        // deepest possible low.
        points.push(EquityPoint::low(Decimal::ZERO));
        let after = compute_drawdown(start, &points).unwrap();

        prop_assert!(after.worst_drawdown_pct >= before.worst_drawdown_pct);
        prop_assert_eq!(after.worst_drawdown_pct, dec!(100));
    }
}
