use crate::shared::api_utils::fetch_all;
use contracts::dashboards::d402_assets_investments::dto::{summarize, AssetsInvestmentsSummary};
use contracts::domain::a001_asset::aggregate::Asset;
use contracts::domain::a006_investment::aggregate::Investment;

pub async fn load_summary() -> Result<AssetsInvestmentsSummary, String> {
    let (assets, investments) = futures::join!(fetch_all::<Asset>(), fetch_all::<Investment>());
    Ok(summarize(&assets?, &investments?))
}
