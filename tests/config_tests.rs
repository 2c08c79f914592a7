use spc_chart::SpcConfig;
use spc_chart::control::{CusumConfig, EwmaConfig, ShewhartConfig};
use spc_chart::core::{BarField, TimeAxisConfig, ZeroWidthWindowPolicy};
use spc_chart::error::SpcError;

#[test]
fn defaults_match_the_documented_parameters() {
    let config = SpcConfig::default();
    assert_eq!(config.shewhart.warning_sigma, 2.0);
    assert_eq!(config.shewhart.action_sigma, 3.0);
    assert!(!config.shewhart.filter_outliers);
    assert_eq!(config.ewma.control_multiple, 5.0);
    assert_eq!(config.ewma.smoothing_factor, 0.3);
    assert_eq!(config.cusum.beta, 0.01);
    assert_eq!(config.cusum.delta, 1.0);
    assert_eq!(
        config.time_axis.zero_width_policy,
        ZeroWidthWindowPolicy::ZeroOffset
    );
    assert_eq!(config.time_axis.field, BarField::Open);
}

#[test]
fn empty_document_yields_defaults() {
    let config = SpcConfig::from_json_str("{}").expect("parse");
    assert_eq!(config, SpcConfig::default());
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let config = SpcConfig::from_json_str(
        r#"{"ewma": {"smoothing_factor": 0.5}, "time_axis": {"zero_width_policy": "reject"}}"#,
    )
    .expect("parse");
    assert_eq!(config.ewma.smoothing_factor, 0.5);
    assert_eq!(config.ewma.control_multiple, 5.0);
    assert_eq!(config.time_axis.zero_width_policy, ZeroWidthWindowPolicy::Reject);
    assert_eq!(config.shewhart, ShewhartConfig::default());
}

#[test]
fn invalid_sections_are_rejected_on_load() {
    let err = SpcConfig::from_json_str(r#"{"ewma": {"smoothing_factor": 0.0}}"#)
        .expect_err("alpha must be positive");
    assert!(matches!(err, SpcError::InvalidParameter(_)));

    let err = SpcConfig::from_json_str("{not json").expect_err("malformed");
    assert!(matches!(err, SpcError::Json(_)));
}

#[test]
fn builders_round_trip_through_json() {
    let config = SpcConfig::default()
        .with_time_axis(TimeAxisConfig::default().with_field(BarField::Close))
        .with_shewhart(ShewhartConfig::default().with_filter_outliers(true))
        .with_ewma(EwmaConfig::default().with_control_multiple(3.0))
        .with_cusum(CusumConfig::default().with_delta(2.0));
    let json = config.to_json_pretty().expect("serialize");
    let restored = SpcConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}
