//! Formatting helpers for amounts and dates
//!
//! Amounts in taka are shown the way the Bengali locale prints them: lakh/crore
//! digit grouping (`12,34,567`), Bengali digits and the `৳` sign in front.
//! Riyal amounts use western grouping since they come from Saudi invoices.

use chrono::{Datelike, NaiveDate};

/// Placeholder for values the API did not return
pub const NOT_AVAILABLE: &str = "N/A";

const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

const BENGALI_MONTHS: [&str; 12] = [
    "জানুয়ারী",
    "ফেব্রুয়ারী",
    "মার্চ",
    "এপ্রিল",
    "মে",
    "জুন",
    "জুলাই",
    "আগস্ট",
    "সেপ্টেম্বর",
    "অক্টোবর",
    "নভেম্বর",
    "ডিসেম্বর",
];

/// Replace ASCII digits with Bengali digits, everything else is kept
pub fn to_bengali_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => BENGALI_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Replace Bengali digits with ASCII digits (inverse of [`to_bengali_digits`])
pub fn from_bengali_digits(s: &str) -> String {
    s.chars()
        .map(|c| match BENGALI_DIGITS.iter().position(|&b| b == c) {
            Some(d) => char::from(b'0' + d as u8),
            None => c,
        })
        .collect()
}

/// Group an unsigned digit string the South Asian way: the last three digits,
/// then groups of two (`1234567` -> `12,34,567`)
pub fn group_south_asian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Group an unsigned digit string by thousands (`1234567` -> `1,234,567`)
pub fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Split a value into sign, integer part and hundredths, rounding to two
/// decimals. Non-finite values are treated as zero.
fn split_amount(value: f64) -> (bool, u64, u64) {
    if !value.is_finite() {
        return (false, 0, 0);
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let negative = value < 0.0 && cents != 0;
    (negative, cents / 100, cents % 100)
}

/// Fraction digits without trailing zeros ("" for .00, "5" for .50)
fn trimmed_fraction(hundredths: u64) -> String {
    match hundredths {
        0 => String::new(),
        h if h % 10 == 0 => format!("{}", h / 10),
        h => format!("{:02}", h),
    }
}

fn south_asian_number(value: f64) -> (bool, String) {
    let (negative, int_part, hundredths) = split_amount(value);
    let mut body = group_south_asian(&int_part.to_string());
    let fraction = trimmed_fraction(hundredths);
    if !fraction.is_empty() {
        body.push('.');
        body.push_str(&fraction);
    }
    (negative, body)
}

/// Number in the Bengali locale: lakh grouping, Bengali digits,
/// at most two fraction digits
///
/// ```
/// use contracts::shared::format::format_number_bn;
/// assert_eq!(format_number_bn(1234567.5), "১২,৩৪,৫৬৭.৫");
/// ```
pub fn format_number_bn(value: f64) -> String {
    let (negative, body) = south_asian_number(value);
    let sign = if negative { "-" } else { "" };
    format!("{}{}", sign, to_bengali_digits(&body))
}

/// Taka amount in the Bengali locale (`50000` -> `৳৫০,০০০`)
///
/// ```
/// use contracts::shared::format::format_bdt;
/// assert_eq!(format_bdt(50000.0), "৳৫০,০০০");
/// ```
pub fn format_bdt(value: f64) -> String {
    let (negative, body) = south_asian_number(value);
    let sign = if negative { "-" } else { "" };
    format!("{}৳{}", sign, to_bengali_digits(&body))
}

/// Taka amount with ASCII digits (`50000` -> `৳50,000`), used in exports
pub fn format_bdt_en(value: f64) -> String {
    let (negative, body) = south_asian_number(value);
    let sign = if negative { "-" } else { "" };
    format!("{}৳{}", sign, body)
}

/// Plain taka amount for documents that cannot render `৳` (`BDT 50,000.00`)
pub fn format_bdt_plain(value: f64) -> String {
    let (negative, int_part, hundredths) = split_amount(value);
    let sign = if negative { "-" } else { "" };
    format!(
        "BDT {}{}.{:02}",
        sign,
        group_south_asian(&int_part.to_string()),
        hundredths
    )
}

/// Riyal amount with western grouping and two decimals (`SAR 1,234.50`)
pub fn format_sar(value: f64) -> String {
    let (negative, int_part, hundredths) = split_amount(value);
    let sign = if negative { "-" } else { "" };
    format!(
        "SAR {}{}.{:02}",
        sign,
        group_thousands(&int_part.to_string(), ','),
        hundredths
    )
}

/// Date as `DD/MM/YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Date in the Bengali locale (`2024-03-15` -> `১৫ মার্চ ২০২৪`)
pub fn format_date_bn(date: NaiveDate) -> String {
    let month = BENGALI_MONTHS[date.month0() as usize];
    format!(
        "{} {} {}",
        to_bengali_digits(&date.day().to_string()),
        month,
        to_bengali_digits(&date.year().to_string())
    )
}

/// Bengali month name for 1..=12, empty otherwise
pub fn month_name_bn(month: u32) -> &'static str {
    match month {
        1..=12 => BENGALI_MONTHS[(month - 1) as usize],
        _ => "",
    }
}

/// Optional date as `DD/MM/YYYY`, `N/A` when missing
pub fn format_date_opt(date: Option<NaiveDate>) -> String {
    date.map(format_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Format a date string coming straight from the API
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps; anything else is returned
/// unchanged, an empty string becomes `N/A`.
pub fn format_date_str(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format_date(date),
        Err(_) => trimmed.to_string(),
    }
}

/// Whole days from `from` to `to`, never negative
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days().max(0)
}

/// Optional text, `N/A` when missing or blank
pub fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bengali_digits() {
        assert_eq!(to_bengali_digits("2024-03-15"), "২০২৪-০৩-১৫");
        assert_eq!(to_bengali_digits("abc"), "abc");
        assert_eq!(from_bengali_digits("৫০,০০০"), "50,000");
    }

    #[test]
    fn test_group_south_asian() {
        assert_eq!(group_south_asian("0"), "0");
        assert_eq!(group_south_asian("999"), "999");
        assert_eq!(group_south_asian("1000"), "1,000");
        assert_eq!(group_south_asian("50000"), "50,000");
        assert_eq!(group_south_asian("100000"), "1,00,000");
        assert_eq!(group_south_asian("1234567"), "12,34,567");
        assert_eq!(group_south_asian("123456789"), "12,34,56,789");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0", ','), "0");
        assert_eq!(group_thousands("1000", ','), "1,000");
        assert_eq!(group_thousands("1234567", '.'), "1.234.567");
    }

    #[test]
    fn test_format_bdt() {
        assert_eq!(format_bdt(50000.0), "৳৫০,০০০");
        assert_eq!(format_bdt(0.0), "৳০");
        assert_eq!(format_bdt(1234567.0), "৳১২,৩৪,৫৬৭");
        assert_eq!(format_bdt(1500.5), "৳১,৫০০.৫");
        assert_eq!(format_bdt(99.999), "৳১০০");
        assert_eq!(format_bdt(-2500.25), "-৳২,৫০০.২৫");
        assert_eq!(format_bdt(f64::NAN), "৳০");
    }

    #[test]
    fn test_format_bdt_en_and_plain() {
        assert_eq!(format_bdt_en(50000.0), "৳50,000");
        assert_eq!(format_bdt_plain(123456.7), "BDT 1,23,456.70");
    }

    #[test]
    fn test_format_number_bn() {
        assert_eq!(format_number_bn(42.0), "৪২");
        assert_eq!(format_number_bn(-0.001), "০");
    }

    #[test]
    fn test_format_sar() {
        assert_eq!(format_sar(1234.5), "SAR 1,234.50");
        assert_eq!(format_sar(0.0), "SAR 0.00");
        assert_eq!(format_sar(-10.0), "SAR -10.00");
    }

    #[test]
    fn test_format_dates() {
        assert_eq!(format_date(date(2024, 3, 15)), "15/03/2024");
        assert_eq!(format_date_bn(date(2024, 3, 15)), "১৫ মার্চ ২০২৪");
        assert_eq!(format_date_opt(None), "N/A");
        assert_eq!(month_name_bn(12), "ডিসেম্বর");
        assert_eq!(month_name_bn(13), "");
    }

    #[test]
    fn test_format_date_str() {
        assert_eq!(format_date_str("2024-03-15"), "15/03/2024");
        assert_eq!(format_date_str("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date_str(""), "N/A");
        assert_eq!(format_date_str("invalid"), "invalid");
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(date(2024, 6, 1), date(2024, 6, 11)), 10);
        assert_eq!(days_between(date(2024, 6, 11), date(2024, 6, 1)), 0);
        assert_eq!(days_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
    }

    #[test]
    fn test_or_na() {
        assert_eq!(or_na(Some("Dhaka")), "Dhaka");
        assert_eq!(or_na(Some("  ")), "N/A");
        assert_eq!(or_na(None), "N/A");
    }
}
