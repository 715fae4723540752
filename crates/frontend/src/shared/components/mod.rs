pub mod detail_grid;
pub mod dialogs;
pub mod page_header;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
pub mod status_box;
pub mod ui;
