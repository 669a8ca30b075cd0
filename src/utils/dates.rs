//! Calendar axis for daily series

use chrono::{Days, NaiveDate};

/// `days + 1` consecutive calendar dates starting at `start`
///
/// Dates past `NaiveDate::MAX` are not representable, so the axis stops
/// early in that case.
pub fn date_axis(start: NaiveDate, days: usize) -> Vec<NaiveDate> {
    (0..=days as u64)
        .map_while(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}
