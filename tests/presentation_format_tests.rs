use chrono::NaiveDate;

use spc_chart::presentation::{
    AxisFrequency, TickInterval, YAxisFormat, axis_tick_spec, format_for, format_for_name,
};

#[test]
fn percentage_aliases_resolve_to_percent_ticks() {
    for name in ["percentage", "pct", "freq", "Percentage"] {
        let descriptor = format_for_name(name);
        assert_eq!(descriptor.tick_format, "~%", "alias {name}");
        assert!(descriptor.tick_prefix.is_none());
        assert!(descriptor.is_percent());
    }
}

#[test]
fn currency_aliases_carry_a_pound_prefix() {
    for name in ["currency", "pound", "£", "severity"] {
        let descriptor = format_for_name(name);
        assert_eq!(descriptor.tick_format, "~s", "alias {name}");
        assert_eq!(descriptor.tick_prefix.as_deref(), Some("£ "));
    }
}

#[test]
fn unknown_format_names_fall_back_to_numeric() {
    assert_eq!(YAxisFormat::from_name("bogus"), YAxisFormat::Numeric);
    assert_eq!(format_for_name("bogus"), format_for(YAxisFormat::Numeric));
    assert_eq!(format_for(YAxisFormat::Integer), format_for(YAxisFormat::Numeric));
    assert_eq!(format_for(YAxisFormat::Numeric).tick_format, "~s");
}

#[test]
fn y_axis_format_deserializes_leniently() {
    let parsed: YAxisFormat = serde_json::from_str("\"pct\"").expect("parse");
    assert_eq!(parsed, YAxisFormat::Percentage);
    let parsed: YAxisFormat = serde_json::from_str("\"whatever\"").expect("parse");
    assert_eq!(parsed, YAxisFormat::Numeric);
    assert_eq!(
        serde_json::to_string(&YAxisFormat::Currency).expect("serialize"),
        "\"currency\""
    );
}

#[test]
fn tick_specs_follow_the_requested_frequency() {
    let monthly = axis_tick_spec(AxisFrequency::Monthly);
    assert_eq!(monthly.tick_format, "%Y-%m");
    assert_eq!(monthly.interval, TickInterval::Months(1));
    assert_eq!(axis_tick_spec(AxisFrequency::Default), monthly);

    let weekly = axis_tick_spec(AxisFrequency::Weekly);
    assert_eq!(weekly.tick_format, "%Y-%m-%d");
    assert_eq!(weekly.interval, TickInterval::Days(7));
    assert_eq!(weekly.interval.as_millis(), Some(604_800_000));
    assert_eq!(weekly.anchor, NaiveDate::from_ymd_opt(2021, 1, 4));

    let quarterly = axis_tick_spec(AxisFrequency::Quarterly);
    assert_eq!(quarterly.tick_format, "%Y-%m");
    assert_eq!(quarterly.interval, TickInterval::Months(3));
    assert_eq!(quarterly.interval.as_millis(), None);
}

#[test]
fn unknown_frequency_names_fall_back_to_monthly() {
    assert_eq!(AxisFrequency::from_name("daily"), AxisFrequency::Monthly);
    assert_eq!(AxisFrequency::from_name("WEEKLY"), AxisFrequency::Weekly);
    assert_eq!(AxisFrequency::from_name("default"), AxisFrequency::Default);
}
