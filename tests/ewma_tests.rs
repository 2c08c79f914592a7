use approx::assert_relative_eq;
use chrono::NaiveDate;

use spc_chart::control::{CenterLine, ChartKind, EwmaConfig, ThresholdKind, ewma};
use spc_chart::core::DatedSeries;
use spc_chart::error::SpcError;

fn january(values: &[f64]) -> DatedSeries {
    DatedSeries::from_dates(values.iter().enumerate().map(|(i, &v)| {
        (
            NaiveDate::from_ymd_opt(2024, 1, i as u32 + 1).expect("valid date"),
            v,
        )
    }))
    .expect("valid series")
}

#[test]
fn smoothed_series_starts_at_the_first_observation() {
    let series = january(&[10.0, 12.0, 8.0, 14.0, 6.0]);
    let result = ewma(&series, EwmaConfig::default()).expect("ewma");

    assert_eq!(result.kind, ChartKind::Ewma);
    let smoothed = result.series.values();
    let expected = [10.0, 10.6, 9.82, 11.074, 9.5518];
    for (actual, expected) in smoothed.iter().zip(expected) {
        assert_relative_eq!(*actual, expected, epsilon = 1e-9);
    }
    assert_eq!(result.series.times(), series.times());
}

#[test]
fn unit_smoothing_factor_reproduces_the_input() {
    let series = january(&[3.0, -1.0, 4.0, 1.5]);
    let config = EwmaConfig::default().with_smoothing_factor(1.0);
    let result = ewma(&series, config).expect("ewma");
    assert_eq!(result.series.values(), series.values());
}

#[test]
fn band_uses_raw_mean_and_grows_towards_its_asymptote() {
    let series = january(&[10.0, 12.0, 8.0, 14.0, 6.0]);
    let result = ewma(&series, EwmaConfig::default()).expect("ewma");

    assert_eq!(result.center_line, Some(CenterLine::Constant(10.0)));
    let stats = result.statistics.expect("statistics");
    assert_eq!(stats.month_span, Some(1));

    let upper = &result
        .threshold(ThresholdKind::ControlUpper)
        .expect("upper band")
        .values;
    let lower = &result
        .threshold(ThresholdKind::ControlLower)
        .expect("lower band")
        .values;

    // 5 * sqrt(10) * sqrt(0.3 / 1.7 * (1 - 0.49)) = 1.5 * sqrt(10)
    assert_relative_eq!(upper[0], 10.0 + 1.5 * 10f64.sqrt(), epsilon = 1e-9);
    assert_relative_eq!(lower[0], 10.0 - 1.5 * 10f64.sqrt(), epsilon = 1e-9);

    let asymptote = 5.0 * 10f64.sqrt() * (0.3f64 / 1.7).sqrt();
    for pair in upper.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    assert!(upper.iter().all(|&u| u - 10.0 < asymptote));
    for (u, l) in upper.iter().zip(lower) {
        assert_relative_eq!(u - 10.0, 10.0 - l, epsilon = 1e-9);
    }
}

#[test]
fn band_width_shrinks_with_the_number_of_months_spanned() {
    let series = DatedSeries::from_dates([
        (NaiveDate::from_ymd_opt(2024, 1, 31).expect("date"), 10.0),
        (NaiveDate::from_ymd_opt(2024, 2, 1).expect("date"), 12.0),
        (NaiveDate::from_ymd_opt(2024, 3, 15).expect("date"), 8.0),
    ])
    .expect("valid series");
    let result = ewma(&series, EwmaConfig::default()).expect("ewma");
    let stats = result.statistics.expect("statistics");
    assert_eq!(stats.month_span, Some(3));

    let upper = result
        .threshold(ThresholdKind::ControlUpper)
        .expect("upper band");
    let expected = 10.0 + 5.0 * stats.std_dev / 3f64.sqrt() * (0.3f64 / 1.7 * 0.51).sqrt();
    assert_relative_eq!(upper.values[0], expected, epsilon = 1e-9);
}

#[test]
fn smoothing_factor_outside_unit_interval_is_rejected() {
    let series = january(&[1.0, 2.0, 3.0]);
    for alpha in [0.0, -0.1, 1.5, f64::NAN] {
        let config = EwmaConfig::default().with_smoothing_factor(alpha);
        assert!(matches!(
            ewma(&series, config),
            Err(SpcError::InvalidParameter(_))
        ));
    }
}

#[test]
fn single_point_is_rejected() {
    let err = ewma(&january(&[1.0]), EwmaConfig::default()).expect_err("too short");
    assert!(matches!(err, SpcError::InsufficientData { .. }));
}
