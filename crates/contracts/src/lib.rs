//! Shared data contracts of the travel ERP.
//!
//! Everything in this crate is plain data and pure functions, used by both
//! the axum backend and the Leptos frontend.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
