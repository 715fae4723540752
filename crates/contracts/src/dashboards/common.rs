use serde::{Deserialize, Serialize};

use crate::shared::calc::sum_by;

/// Paid and outstanding amounts over a set of records
///
/// `total` is always exactly `paid + due`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MoneySummary {
    pub count: usize,
    pub paid: f64,
    pub due: f64,
    pub total: f64,
}

impl MoneySummary {
    pub fn from_items<T>(items: &[T], paid: impl Fn(&T) -> f64, due: impl Fn(&T) -> f64) -> Self {
        let paid = sum_by(items, paid);
        let due = sum_by(items, due);
        Self {
            count: items.len(),
            paid,
            due,
            total: paid + due,
        }
    }

    /// Share of the total already paid, in percent
    pub fn paid_percent(&self) -> f64 {
        if self.total <= 0.0 {
            0.0
        } else {
            (self.paid / self.total * 1000.0).round() / 10.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_paid_plus_due() {
        let rows = [(0.1, 0.2), (1000.55, 300.45), (0.0, 0.0)];
        let summary = MoneySummary::from_items(&rows, |r| r.0, |r| r.1);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total, summary.paid + summary.due);
        assert_eq!(summary.paid, 1000.65);
        assert_eq!(summary.due, 300.65);
    }

    #[test]
    fn empty_set_is_all_zero() {
        let summary = MoneySummary::from_items::<(f64, f64)>(&[], |r| r.0, |r| r.1);
        assert_eq!(summary, MoneySummary::default());
        assert_eq!(summary.paid_percent(), 0.0);
    }

    #[test]
    fn test_paid_percent() {
        let summary = MoneySummary { count: 1, paid: 1.0, due: 2.0, total: 3.0 };
        assert_eq!(summary.paid_percent(), 33.3);
    }
}
