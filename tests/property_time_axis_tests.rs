use std::collections::BTreeSet;

use chrono::NaiveDate;
use proptest::prelude::*;
use spc_chart::core::{IntradayBar, normalize};

fn build_bars(days: &[BTreeSet<u32>]) -> Vec<IntradayBar> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let mut bars = Vec::new();
    for (offset, minutes) in days.iter().enumerate() {
        let date = start + chrono::Duration::days(offset as i64);
        for &minute in minutes {
            let time = date
                .and_hms_opt(minute / 60, minute % 60, 0)
                .expect("valid time");
            bars.push(IntradayBar::new(time, 10.0, 11.0, 9.0, 10.5, 1).expect("valid bar"));
        }
    }
    bars
}

proptest! {
    #[test]
    fn corrected_times_are_monotonic_and_length_preserving(
        days in proptest::collection::vec(
            proptest::collection::btree_set(570u32..=960, 1..24),
            1..6
        )
    ) {
        let bars = build_bars(&days);
        let corrected = normalize(&bars).expect("normalize");
        prop_assert_eq!(corrected.len(), bars.len());

        let times = corrected.corrected_times();
        for pair in times.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        for (point, bar) in corrected.points().iter().zip(&bars) {
            prop_assert_eq!(point.corrected_time.date(), bar.time.date());
        }
    }
}
