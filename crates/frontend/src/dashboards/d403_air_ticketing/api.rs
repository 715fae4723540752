use crate::shared::api_utils::fetch_all;
use contracts::dashboards::d403_air_ticketing::dto::{summarize, AirTicketingSummary};
use contracts::domain::a002_vendor::aggregate::Vendor;
use contracts::domain::a004_air_agent::aggregate::AirAgent;
use contracts::domain::a005_gds_record::aggregate::GdsRecord;
use contracts::domain::a010_air_refund::aggregate::AirRefund;
use contracts::domain::a011_air_reissue::aggregate::AirReissue;

/// Raw collections behind the air ticketing dashboard
///
/// Kept as loaded so changing the GDS year does not refetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirTicketingData {
    pub agents: Vec<AirAgent>,
    pub vendors: Vec<Vendor>,
    pub refunds: Vec<AirRefund>,
    pub reissues: Vec<AirReissue>,
    pub gds_records: Vec<GdsRecord>,
}

impl AirTicketingData {
    pub fn summary(&self, year: Option<i32>) -> AirTicketingSummary {
        summarize(
            &self.agents,
            &self.vendors,
            &self.refunds,
            &self.reissues,
            &self.gds_records,
            year,
        )
    }

    /// Years present in the GDS records, newest first
    pub fn gds_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.gds_records.iter().map(|r| r.year).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        years
    }
}

pub async fn load_data() -> Result<AirTicketingData, String> {
    let (agents, vendors, refunds, reissues, gds_records) = futures::join!(
        fetch_all::<AirAgent>(),
        fetch_all::<Vendor>(),
        fetch_all::<AirRefund>(),
        fetch_all::<AirReissue>(),
        fetch_all::<GdsRecord>(),
    );
    Ok(AirTicketingData {
        agents: agents?,
        vendors: vendors?,
        refunds: refunds?,
        reissues: reissues?,
        gds_records: gds_records?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gds_years_are_unique_and_descending() {
        let record = |year| GdsRecord {
            year,
            month: 1,
            ..Default::default()
        };
        let data = AirTicketingData {
            gds_records: vec![record(2023), record(2025), record(2023), record(2024)],
            ..Default::default()
        };
        assert_eq!(data.gds_years(), vec![2025, 2024, 2023]);
    }
}
