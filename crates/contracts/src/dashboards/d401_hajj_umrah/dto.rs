use serde::{Deserialize, Serialize};

use crate::dashboards::MoneySummary;
use crate::domain::a003_customer::aggregate::{Customer, CustomerType};
use crate::domain::a007_sar_rate::aggregate::{latest_rate, SarRate};
use crate::domain::a012_hotel_contract::aggregate::{ContractStatus, HotelContract};
use crate::enums::ActiveStatus;
use crate::shared::calc::sum_by;

/// Hotel contracts that are not cancelled
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelSummary {
    pub contracts: usize,
    pub rooms: u64,
    pub total_sar: f64,
    pub total_bdt: f64,
    pub money: MoneySummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HajjUmrahSummary {
    pub customers: MoneySummary,
    pub hajj_count: usize,
    pub umrah_count: usize,
    pub active_count: usize,
    pub hotels: HotelSummary,
    pub latest_sar_rate: Option<f64>,
}

pub fn summarize(customers: &[Customer], contracts: &[HotelContract], rates: &[SarRate]) -> HajjUmrahSummary {
    let count_type = |t: CustomerType| customers.iter().filter(|c| c.customer_type == t).count();

    let live: Vec<&HotelContract> = contracts
        .iter()
        .filter(|c| c.status != ContractStatus::Cancelled)
        .collect();

    HajjUmrahSummary {
        customers: MoneySummary::from_items(customers, |c| c.paid_amount, |c| c.due_amount),
        hajj_count: count_type(CustomerType::Hajj),
        umrah_count: count_type(CustomerType::Umrah),
        active_count: customers
            .iter()
            .filter(|c| c.status == ActiveStatus::Active)
            .count(),
        hotels: HotelSummary {
            contracts: live.len(),
            rooms: live.iter().map(|c| u64::from(c.rooms)).sum(),
            total_sar: sum_by(&live, |c| c.total_sar),
            total_bdt: sum_by(&live, |c| c.total_bdt),
            money: MoneySummary::from_items(&live, |c| c.paid_amount, |c| c.due_amount),
        },
        latest_sar_rate: latest_rate(rates).map(|r| r.rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn customer(t: CustomerType, paid: f64, due: f64, status: ActiveStatus) -> Customer {
        Customer {
            customer_type: t,
            paid_amount: paid,
            due_amount: due,
            status,
            ..Default::default()
        }
    }

    fn contract(status: ContractStatus, total_bdt: f64, paid: f64) -> HotelContract {
        HotelContract {
            status,
            rooms: 2,
            total_sar: total_bdt / 32.0,
            total_bdt,
            paid_amount: paid,
            due_amount: (total_bdt - paid).max(0.0),
            ..Default::default()
        }
    }

    #[test]
    fn summarizes_customers_and_hotels() {
        let customers = vec![
            customer(CustomerType::Hajj, 500000.0, 150000.0, ActiveStatus::Active),
            customer(CustomerType::Umrah, 120000.0, 0.0, ActiveStatus::Active),
            customer(CustomerType::Umrah, 60000.0, 40000.0, ActiveStatus::Inactive),
        ];
        let contracts = vec![
            contract(ContractStatus::Confirmed, 320000.0, 200000.0),
            contract(ContractStatus::Cancelled, 99999.0, 0.0),
            contract(ContractStatus::Draft, 64000.0, 0.0),
        ];
        let rates = vec![SarRate {
            date: NaiveDate::from_ymd_opt(2025, 1, 1),
            rate: 32.0,
            ..Default::default()
        }];

        let summary = summarize(&customers, &contracts, &rates);
        assert_eq!(summary.customers.total, 870000.0);
        assert_eq!(summary.customers.total, summary.customers.paid + summary.customers.due);
        assert_eq!((summary.hajj_count, summary.umrah_count, summary.active_count), (1, 2, 2));
        assert_eq!(summary.hotels.contracts, 2);
        assert_eq!(summary.hotels.rooms, 4);
        assert_eq!(summary.hotels.total_bdt, 384000.0);
        assert_eq!(summary.hotels.money.due, 184000.0);
        assert_eq!(summary.latest_sar_rate, Some(32.0));
    }

    #[test]
    fn room_total_does_not_overflow() {
        let big = HotelContract {
            rooms: u32::MAX,
            ..contract(ContractStatus::Confirmed, 0.0, 0.0)
        };
        let summary = summarize(&[], &[big.clone(), big], &[]);
        assert_eq!(summary.hotels.rooms, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn empty_inputs() {
        let summary = summarize(&[], &[], &[]);
        assert_eq!(summary, HajjUmrahSummary::default());
    }
}
