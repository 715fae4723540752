pub mod a001_asset;
pub mod a002_vendor;
pub mod a003_customer;
pub mod a004_air_agent;
pub mod a005_gds_record;
pub mod a006_investment;
pub mod a007_sar_rate;
pub mod a008_markup_rule;
pub mod a009_expense_category;
pub mod a010_air_refund;
pub mod a011_air_reissue;
pub mod a012_hotel_contract;
pub mod a013_employee;
