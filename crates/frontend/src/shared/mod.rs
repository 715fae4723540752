pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod detail_page;
pub mod download;
pub mod form;
pub mod icons;
pub mod list_page;
