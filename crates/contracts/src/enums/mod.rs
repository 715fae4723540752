pub mod active_status;

pub use active_status::ActiveStatus;
