pub mod home;
pub mod search;
