use crate::shared::api_utils::fetch_all;
use contracts::dashboards::d401_hajj_umrah::dto::{summarize, HajjUmrahSummary};
use contracts::domain::a003_customer::aggregate::Customer;
use contracts::domain::a007_sar_rate::aggregate::SarRate;
use contracts::domain::a012_hotel_contract::aggregate::HotelContract;

/// Customers, hotel contracts and SAR rates, fetched in parallel
pub async fn load_summary() -> Result<HajjUmrahSummary, String> {
    let (customers, contracts, rates) = futures::join!(
        fetch_all::<Customer>(),
        fetch_all::<HotelContract>(),
        fetch_all::<SarRate>(),
    );
    Ok(summarize(&customers?, &contracts?, &rates?))
}
