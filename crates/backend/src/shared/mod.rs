pub mod config;
pub mod data;
pub mod error;
pub mod request_logger;
pub mod state;
