pub mod crud;
pub mod search;
