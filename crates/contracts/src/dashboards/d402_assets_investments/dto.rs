use serde::{Deserialize, Serialize};

use crate::domain::a001_asset::aggregate::{Asset, AssetStatus};
use crate::domain::a006_investment::aggregate::{Investment, InvestmentStatus};
use crate::shared::calc::{round2, sum_by};

/// One line of a by-category breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub label: String,
    pub count: usize,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetSummary {
    pub count: usize,
    pub active_count: usize,
    pub disposed_count: usize,
    /// Paid for assets still held (disposed ones excluded)
    pub total_value: f64,
    pub by_type: Vec<CategoryTotal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSummary {
    pub count: usize,
    pub active_count: usize,
    pub total_invested: f64,
    pub total_returns: f64,
    pub net_profit: f64,
    pub by_type: Vec<CategoryTotal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetsInvestmentsSummary {
    pub assets: AssetSummary,
    pub investments: InvestmentSummary,
    /// Asset value plus money still invested
    pub total_holdings: f64,
}

/// Group by label, largest amount first
fn group_totals<T>(items: &[T], label: impl Fn(&T) -> String, amount: impl Fn(&T) -> f64) -> Vec<CategoryTotal> {
    let mut groups: Vec<CategoryTotal> = Vec::new();
    for item in items {
        let key = label(item);
        match groups.iter_mut().find(|g| g.label == key) {
            Some(group) => {
                group.count += 1;
                group.amount = round2(group.amount + amount(item));
            }
            None => groups.push(CategoryTotal {
                label: key,
                count: 1,
                amount: round2(amount(item)),
            }),
        }
    }
    groups.sort_by(|a, b| b.amount.total_cmp(&a.amount).then_with(|| a.label.cmp(&b.label)));
    groups
}

pub fn summarize(assets: &[Asset], investments: &[Investment]) -> AssetsInvestmentsSummary {
    let held: Vec<&Asset> = assets
        .iter()
        .filter(|a| a.status != AssetStatus::Disposed)
        .collect();

    let asset_summary = AssetSummary {
        count: assets.len(),
        active_count: assets.iter().filter(|a| a.status == AssetStatus::Active).count(),
        disposed_count: assets.len() - held.len(),
        total_value: sum_by(&held, |a| a.total_paid_amount),
        by_type: group_totals(&held, |a| a.asset_type.trim().to_string(), |a| a.total_paid_amount),
    };

    let running: Vec<&Investment> = investments
        .iter()
        .filter(|i| i.status == InvestmentStatus::Active)
        .collect();

    let investment_summary = InvestmentSummary {
        count: investments.len(),
        active_count: running.len(),
        total_invested: sum_by(investments, |i| i.amount),
        total_returns: sum_by(investments, |i| i.return_amount),
        net_profit: sum_by(investments, Investment::profit),
        by_type: group_totals(
            investments,
            |i| i.investment_type.display_name().to_string(),
            |i| i.amount,
        ),
    };

    AssetsInvestmentsSummary {
        total_holdings: round2(asset_summary.total_value + sum_by(&running, |i| i.amount)),
        assets: asset_summary,
        investments: investment_summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_investment::aggregate::InvestmentType;

    fn asset(kind: &str, amount: f64, status: AssetStatus) -> Asset {
        Asset {
            asset_type: kind.into(),
            total_paid_amount: amount,
            status,
            ..Default::default()
        }
    }

    fn investment(kind: InvestmentType, amount: f64, returned: f64, status: InvestmentStatus) -> Investment {
        Investment {
            investment_type: kind,
            amount,
            return_amount: returned,
            status,
            ..Default::default()
        }
    }

    #[test]
    fn summarizes_assets_and_investments() {
        let assets = vec![
            asset("IT Equipment", 50000.0, AssetStatus::Active),
            asset("IT Equipment", 30000.0, AssetStatus::Inactive),
            asset("Vehicle", 1500000.0, AssetStatus::Active),
            asset("Furniture", 20000.0, AssetStatus::Disposed),
        ];
        let investments = vec![
            investment(InvestmentType::IataAirlinesCapping, 1000000.0, 0.0, InvestmentStatus::Active),
            investment(InvestmentType::Others, 200000.0, 230000.0, InvestmentStatus::Matured),
        ];

        let summary = summarize(&assets, &investments);
        assert_eq!(summary.assets.count, 4);
        assert_eq!(summary.assets.active_count, 2);
        assert_eq!(summary.assets.disposed_count, 1);
        assert_eq!(summary.assets.total_value, 1580000.0);
        assert_eq!(summary.assets.by_type[0].label, "Vehicle");
        assert_eq!(summary.assets.by_type[1].count, 2);
        assert_eq!(summary.assets.by_type[1].amount, 80000.0);

        assert_eq!(summary.investments.total_invested, 1200000.0);
        assert_eq!(summary.investments.total_returns, 230000.0);
        assert_eq!(summary.investments.net_profit, 30000.0);
        assert_eq!(summary.investments.active_count, 1);
        assert_eq!(summary.total_holdings, 2580000.0);
    }
}
