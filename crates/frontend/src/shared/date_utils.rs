//! Dates on the client
//!
//! Local dates come from the JS `Date` object so they follow the browser's
//! time zone.

use chrono::{DateTime, NaiveDate, Utc};
use contracts::shared::format::{format_date, NOT_AVAILABLE};

/// Today's date in the browser's time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Current year and month (1-12)
pub fn current_year_month() -> (i32, u32) {
    let now = js_sys::Date::new_0();
    (now.get_full_year() as i32, now.get_month() + 1)
}

/// Value of an `<input type="date">`
pub fn input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Record timestamp as `DD/MM/YYYY HH:MM`
pub fn format_timestamp(dt: Option<DateTime<Utc>>) -> String {
    match dt {
        Some(dt) => format!("{} {}", format_date(dt.date_naive()), dt.format("%H:%M")),
        None => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_input_value() {
        assert_eq!(input_value(NaiveDate::from_ymd_opt(2024, 3, 5)), "2024-03-05");
        assert_eq!(input_value(None), "");
    }

    #[test]
    fn test_format_timestamp() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_timestamp(Some(dt)), "15/03/2024 14:02");
        assert_eq!(format_timestamp(None), "N/A");
    }
}
