//! Lenient field decoders for API payloads
//!
//! Records created by older clients store numbers as strings, send `null` for
//! untouched fields and use full timestamps where a date is expected. These
//! helpers are used with `#[serde(deserialize_with = "...")]` so a record is
//! never rejected for such differences: bad numbers become `0`, bad dates
//! become `None`.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::calc::parse_amount;

fn value_to_amount(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_amount(s),
        _ => 0.0,
    }
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .ok()
}

/// Amount from a number, a numeric string or `null`
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_amount(&value))
}

/// Non-negative count (rooms, segments, month) from a number or string
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let n = value_to_amount(&value);
    Ok(if n <= 0.0 { 0 } else { n.min(f64::from(u32::MAX)) as u32 })
}

/// Year from a number or string, `0` when missing
pub fn year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_amount(&value) as i32)
}

/// Optional date; blank strings and unparseable values are `None`
pub fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => parse_date(&s),
        _ => None,
    })
}

/// Optional text; blank strings are `None`
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Boolean from `true`/`false`, `"true"`/`"false"` or `1`/`0`
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => matches!(s.trim(), "true" | "1" | "yes"),
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Legacy {
        #[serde(deserialize_with = "amount")]
        paid: f64,
        #[serde(deserialize_with = "count")]
        rooms: u32,
        #[serde(deserialize_with = "opt_date")]
        date: Option<NaiveDate>,
        #[serde(deserialize_with = "opt_text")]
        notes: Option<String>,
        #[serde(deserialize_with = "flag")]
        active: bool,
    }

    #[test]
    fn lenient_values() {
        let legacy: Legacy = serde_json::from_value(json!({
            "paid": "50,000",
            "rooms": "3",
            "date": "2024-03-15T10:00:00.000Z",
            "notes": "  ",
            "active": "true"
        }))
        .unwrap();
        assert_eq!(legacy.paid, 50000.0);
        assert_eq!(legacy.rooms, 3);
        assert_eq!(legacy.date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(legacy.notes, None);
        assert!(legacy.active);
    }

    #[test]
    fn nulls_and_missing_fields_default() {
        let legacy: Legacy = serde_json::from_value(json!({"paid": null, "date": null, "rooms": -2})).unwrap();
        assert_eq!(legacy.paid, 0.0);
        assert_eq!(legacy.rooms, 0);
        assert_eq!(legacy.date, None);
        assert!(!legacy.active);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-01-09"), NaiveDate::from_ymd_opt(2025, 1, 9));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("09/01/2025"), None);
    }
}
