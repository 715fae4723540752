//! Dashboard aggregation over fetched list pages
//!
//! The frontend loads every record of a few collections in parallel and hands
//! them to these functions; nothing here performs IO.

pub mod common;
pub mod d401_hajj_umrah;
pub mod d402_assets_investments;
pub mod d403_air_ticketing;

pub use common::MoneySummary;
