//! Derived amounts recomputed whenever a form input changes
//!
//! The backend calls the same functions before every write, so stored totals
//! always agree with their inputs.

use chrono::NaiveDate;

use super::format::{days_between, from_bengali_digits};

/// Round to two decimals (paisa / halala)
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// Parse a number typed into a form field
///
/// Accepts Bengali digits and thousands separators; blank or invalid input
/// is zero, the same as a missing field in an API response.
pub fn parse_amount(input: &str) -> f64 {
    let cleaned: String = from_bengali_digits(input.trim())
        .chars()
        .filter(|c| *c != ',' && *c != '_' && !c.is_whitespace())
        .collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Refund due to the passenger:
/// `max(0, actual_fare - used_amount - service_charge - penalty)`
pub fn refund_amount(actual_fare: f64, used_amount: f64, service_charge: f64, penalty: f64) -> f64 {
    round2((actual_fare - used_amount - service_charge - penalty).max(0.0))
}

/// Amount charged for a reissue: `fare_diff + tax_diff + service_fee + penalty`
pub fn reissue_total(fare_difference: f64, tax_difference: f64, service_fee: f64, penalty: f64) -> f64 {
    round2(fare_difference + tax_difference + service_fee + penalty)
}

/// Outstanding balance, never negative
pub fn due_amount(total: f64, paid: f64) -> f64 {
    round2((total - paid).max(0.0))
}

/// GDS incentive earned for a period
pub fn gds_incentive(segments: u32, incentive_per_segment: f64) -> f64 {
    round2(f64::from(segments) * incentive_per_segment)
}

/// Derived figures of a hotel contract
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotelTotals {
    pub nights: i64,
    pub total_sar: f64,
    pub total_bdt: f64,
    pub due_amount: f64,
}

/// Nights, riyal and taka totals of a hotel booking
///
/// Missing dates count as zero nights.
pub fn hotel_totals(
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    rooms: u32,
    rate_per_night_sar: f64,
    sar_rate: f64,
    paid_amount: f64,
) -> HotelTotals {
    let nights = match (check_in, check_out) {
        (Some(from), Some(to)) => days_between(from, to),
        _ => 0,
    };
    let total_sar = round2(f64::from(rooms) * nights as f64 * rate_per_night_sar);
    let total_bdt = round2(total_sar * sar_rate);
    HotelTotals {
        nights,
        total_sar,
        total_bdt,
        due_amount: due_amount(total_bdt, paid_amount),
    }
}

/// Sum a projection of every item
pub fn sum_by<T>(items: &[T], f: impl Fn(&T) -> f64) -> f64 {
    round2(items.iter().map(f).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refund_amount() {
        assert_eq!(refund_amount(50000.0, 10000.0, 1500.0, 3000.0), 35500.0);
        assert_eq!(refund_amount(1000.0, 800.0, 300.0, 0.0), 0.0);
        assert_eq!(refund_amount(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_reissue_total() {
        assert_eq!(reissue_total(2500.0, 800.0, 500.0, 1000.0), 4800.0);
        assert_eq!(reissue_total(0.1, 0.2, 0.0, 0.0), 0.3);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("50,000"), 50000.0);
        assert_eq!(parse_amount("৫০০০০"), 50000.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_hotel_totals() {
        let check_in = NaiveDate::from_ymd_opt(2025, 5, 1);
        let check_out = NaiveDate::from_ymd_opt(2025, 5, 6);
        let totals = hotel_totals(check_in, check_out, 2, 450.0, 32.5, 100000.0);
        assert_eq!(totals.nights, 5);
        assert_eq!(totals.total_sar, 4500.0);
        assert_eq!(totals.total_bdt, 146250.0);
        assert_eq!(totals.due_amount, 46250.0);

        let open = hotel_totals(check_in, None, 2, 450.0, 32.5, 0.0);
        assert_eq!(open.nights, 0);
        assert_eq!(open.total_bdt, 0.0);
    }

    #[test]
    fn test_due_and_incentive() {
        assert_eq!(due_amount(100.0, 150.0), 0.0);
        assert_eq!(due_amount(100.0, 40.0), 60.0);
        assert_eq!(gds_incentive(120, 2.5), 300.0);
    }

    #[test]
    fn test_sum_by() {
        let rows = [(1.0, 2.0), (3.0, 4.0)];
        assert_eq!(sum_by(&rows, |r| r.0), 4.0);
        assert_eq!(sum_by(&rows, |r| r.1), 6.0);
    }
}
