//! Storage contract shared by all aggregates and the generic CRUD service

pub mod repository;
pub mod service;

pub use repository::{contains_text, AggregateTable, CrudRepository};
