use serde::{Deserialize, Serialize};

use crate::dashboards::MoneySummary;
use crate::domain::a002_vendor::aggregate::Vendor;
use crate::domain::a004_air_agent::aggregate::AirAgent;
use crate::domain::a005_gds_record::aggregate::{GdsProvider, GdsRecord};
use crate::domain::a010_air_refund::aggregate::{AirRefund, RefundStatus};
use crate::domain::a011_air_reissue::aggregate::{AirReissue, ReissueStatus};
use crate::shared::calc::{round2, sum_by};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GdsProviderTotal {
    pub provider: GdsProvider,
    pub segments: u64,
    pub incentive: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefundSummary {
    pub count: usize,
    pub pending_count: usize,
    /// Refunds not rejected
    pub total_refund: f64,
    pub total_charges: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReissueSummary {
    pub count: usize,
    pub pending_count: usize,
    /// Reissues not cancelled
    pub total_amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirTicketingSummary {
    pub agents: MoneySummary,
    pub vendors: MoneySummary,
    pub refunds: RefundSummary,
    pub reissues: ReissueSummary,
    /// One row per provider present in the data, in provider order
    pub gds: Vec<GdsProviderTotal>,
    pub total_segments: u64,
    pub total_incentive: f64,
}

/// Air ticketing overview; `year` limits the GDS rows to one year
pub fn summarize(
    agents: &[AirAgent],
    vendors: &[Vendor],
    refunds: &[AirRefund],
    reissues: &[AirReissue],
    gds_records: &[GdsRecord],
    year: Option<i32>,
) -> AirTicketingSummary {
    let counted_refunds: Vec<&AirRefund> = refunds
        .iter()
        .filter(|r| r.status != RefundStatus::Rejected)
        .collect();
    let counted_reissues: Vec<&AirReissue> = reissues
        .iter()
        .filter(|r| r.status != ReissueStatus::Cancelled)
        .collect();

    let mut gds: Vec<GdsProviderTotal> = Vec::new();
    for record in gds_records.iter().filter(|r| year.map_or(true, |y| r.year == y)) {
        match gds.iter_mut().find(|g| g.provider == record.provider) {
            Some(row) => {
                row.segments += u64::from(record.segments);
                row.incentive = round2(row.incentive + record.incentive_amount);
            }
            None => gds.push(GdsProviderTotal {
                provider: record.provider,
                segments: u64::from(record.segments),
                incentive: round2(record.incentive_amount),
            }),
        }
    }
    gds.sort_by_key(|g| g.provider);

    AirTicketingSummary {
        agents: MoneySummary::from_items(agents, |a| a.paid_amount, |a| a.due_amount),
        vendors: MoneySummary::from_items(vendors, |v| v.paid_amount, |v| v.due_amount),
        refunds: RefundSummary {
            count: refunds.len(),
            pending_count: refunds
                .iter()
                .filter(|r| r.status == RefundStatus::Pending)
                .count(),
            total_refund: sum_by(&counted_refunds, |r| r.refund_amount),
            total_charges: sum_by(&counted_refunds, |r| r.service_charge + r.penalty),
        },
        reissues: ReissueSummary {
            count: reissues.len(),
            pending_count: reissues
                .iter()
                .filter(|r| r.status == ReissueStatus::Pending)
                .count(),
            total_amount: sum_by(&counted_reissues, |r| r.total_amount),
        },
        total_segments: gds.iter().map(|g| g.segments).sum(),
        total_incentive: sum_by(&gds, |g| g.incentive),
        gds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gds(provider: GdsProvider, year: i32, segments: u32, incentive: f64) -> GdsRecord {
        GdsRecord {
            provider,
            year,
            month: 1,
            segments,
            incentive_amount: incentive,
            ..Default::default()
        }
    }

    #[test]
    fn summarizes_air_ticketing() {
        let agents = vec![
            AirAgent { paid_amount: 80000.0, due_amount: 20000.0, ..Default::default() },
            AirAgent { paid_amount: 5000.0, due_amount: 0.0, ..Default::default() },
        ];
        let vendors = vec![Vendor { paid_amount: 0.0, due_amount: 45000.0, ..Default::default() }];
        let refunds = vec![
            AirRefund { refund_amount: 34500.0, service_charge: 2000.0, penalty: 4500.0, ..Default::default() },
            AirRefund { refund_amount: 9000.0, status: RefundStatus::Rejected, ..Default::default() },
        ];
        let reissues = vec![
            AirReissue { total_amount: 8350.0, ..Default::default() },
            AirReissue { total_amount: 1000.0, status: ReissueStatus::Cancelled, ..Default::default() },
        ];
        let records = vec![
            gds(GdsProvider::Sabre, 2024, 100, 250.0),
            gds(GdsProvider::Amadeus, 2024, 300, 600.0),
            gds(GdsProvider::Sabre, 2024, 50, 125.0),
            gds(GdsProvider::Galileo, 2023, 999, 999.0),
        ];

        let summary = summarize(&agents, &vendors, &refunds, &reissues, &records, Some(2024));
        assert_eq!(summary.agents.total, 105000.0);
        assert_eq!(summary.agents.total, summary.agents.paid + summary.agents.due);
        assert_eq!(summary.vendors.due, 45000.0);
        assert_eq!(summary.refunds.count, 2);
        assert_eq!(summary.refunds.pending_count, 1);
        assert_eq!(summary.refunds.total_refund, 34500.0);
        assert_eq!(summary.refunds.total_charges, 6500.0);
        assert_eq!(summary.reissues.total_amount, 8350.0);
        assert_eq!(summary.gds.len(), 2);
        assert_eq!(summary.gds[0].provider, GdsProvider::Amadeus);
        assert_eq!(summary.gds[1].segments, 150);
        assert_eq!(summary.total_segments, 450);
        assert_eq!(summary.total_incentive, 975.0);

        let all_years = summarize(&[], &[], &[], &[], &records, None);
        assert_eq!(all_years.gds.len(), 3);
    }
}
