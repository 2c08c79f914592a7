use approx::assert_relative_eq;
use chrono::NaiveDate;

use spc_chart::control::{CenterLine, ChartKind, CusumConfig, cusum};
use spc_chart::core::DatedSeries;
use spc_chart::error::SpcError;

fn daily(values: &[f64]) -> DatedSeries {
    let start = NaiveDate::from_ymd_opt(2023, 6, 1).expect("valid date");
    DatedSeries::from_dates(
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| (start + chrono::Duration::days(i as i64), v)),
    )
    .expect("valid series")
}

#[test]
fn running_statistic_tracks_cumulative_deviation() {
    let series = daily(&[10.0, 12.0, 8.0, 14.0, 6.0]);
    let result = cusum(&series, CusumConfig::default()).expect("cusum");

    assert_eq!(result.kind, ChartKind::Cusum);
    assert_eq!(result.center_line, Some(CenterLine::Constant(10.0)));
    assert!(result.thresholds.is_empty());
    assert_eq!(result.series, series);

    let running = result.secondary.expect("running statistic");
    assert_eq!(running.times(), series.times());
    let expected = [0.0, 2.0, 0.0, 4.0, 0.0];
    for (actual, expected) in running.values().iter().zip(expected) {
        assert_relative_eq!(*actual, expected, epsilon = 1e-12);
    }
}

#[test]
fn first_term_is_the_first_deviation_and_last_term_returns_to_zero() {
    let values = [3.5, 7.25, -1.0, 2.0, 9.0, 4.75];
    let result = cusum(&daily(&values), CusumConfig::default()).expect("cusum");
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let running = result.secondary.expect("running statistic").values();
    assert_relative_eq!(running[0], values[0] - mean, epsilon = 1e-9);
    assert_relative_eq!(running[running.len() - 1], 0.0, epsilon = 1e-9);
}

#[test]
fn invalid_detection_parameters_are_rejected() {
    let series = daily(&[1.0, 2.0, 3.0]);
    assert!(matches!(
        cusum(&series, CusumConfig::default().with_beta(1.0)),
        Err(SpcError::InvalidParameter(_))
    ));
    assert!(matches!(
        cusum(&series, CusumConfig::default().with_delta(0.0)),
        Err(SpcError::InvalidParameter(_))
    ));
}

#[test]
fn running_total_sign_follows_early_departures_from_the_mean() {
    let high_first = cusum(&daily(&[14.0, 13.0, 12.0, 8.0, 7.0, 6.0]), CusumConfig::default())
        .expect("cusum");
    let total: f64 = high_first.secondary.expect("running statistic").values().iter().sum();
    assert_relative_eq!(total, 31.0, epsilon = 1e-9);

    let low_first = cusum(&daily(&[6.0, 7.0, 8.0, 12.0, 13.0, 14.0]), CusumConfig::default())
        .expect("cusum");
    let total: f64 = low_first.secondary.expect("running statistic").values().iter().sum();
    assert_relative_eq!(total, -31.0, epsilon = 1e-9);
}
