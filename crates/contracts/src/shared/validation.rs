//! Field-level validation shared by the forms and the backend services

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Validation messages keyed by field name (camelCase, as on the wire)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first message for a field wins
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Drop the message of one field (when the user edits it)
    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    // ------------------------------------------------------------------
    // Rules
    // ------------------------------------------------------------------

    /// Text must not be blank
    pub fn require_text(&mut self, field: &str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, format!("{} আবশ্যক", label));
        }
    }

    /// Optional value must be present
    pub fn require_some<T>(&mut self, field: &str, label: &str, value: &Option<T>) {
        if value.is_none() {
            self.add(field, format!("{} আবশ্যক", label));
        }
    }

    /// Amount must be zero or more
    pub fn non_negative(&mut self, field: &str, label: &str, value: f64) {
        if !value.is_finite() || value < 0.0 {
            self.add(field, format!("{} ঋণাত্মক হতে পারে না", label));
        }
    }

    /// Amount must be strictly positive
    pub fn positive(&mut self, field: &str, label: &str, value: f64) {
        if !value.is_finite() || value <= 0.0 {
            self.add(field, format!("{} শূন্যের বেশি হতে হবে", label));
        }
    }

    /// Optional e-mail must look like one when filled in
    pub fn optional_email(&mut self, field: &str, value: Option<&str>) {
        if let Some(email) = value.map(str::trim).filter(|v| !v.is_empty()) {
            if !is_valid_email(email) {
                self.add(field, "সঠিক ইমেইল ঠিকানা দিন");
            }
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl std::error::Error for FieldErrors {}

/// Simple e-mail check: `local@domain.tld`, no whitespace, one `@`
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let Some((name, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !name.is_empty() && !name.starts_with('.') && tld.len() >= 2 && tld.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("info@agency.com.bd"));
        assert!(is_valid_email("a.b+c@x.io"));
        assert!(!is_valid_email("agency.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b.c1"));
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.require_text("name", "নাম", " ");
        errors.add("name", "other");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("নাম আবশ্যক"));
    }

    #[test]
    fn rules_accept_valid_values() {
        let mut errors = FieldErrors::new();
        errors.require_text("name", "নাম", "Laptop");
        errors.require_some("date", "তারিখ", &Some(1));
        errors.non_negative("paid", "পরিশোধিত", 0.0);
        errors.positive("rate", "রেট", 31.2);
        errors.optional_email("email", None);
        errors.optional_email("email", Some(""));
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn rules_reject_invalid_values() {
        let mut errors = FieldErrors::new();
        errors.require_some::<i32>("date", "তারিখ", &None);
        errors.non_negative("paid", "পরিশোধিত", -1.0);
        errors.positive("rate", "রেট", 0.0);
        errors.optional_email("email", Some("nope"));
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.len(), 4);
        assert!(err.contains("email"));
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.add("pnr", "PNR আবশ্যক");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"pnr": "PNR আবশ্যক"}));
    }
}
