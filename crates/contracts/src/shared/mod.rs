pub mod calc;
pub mod format;
pub mod list;
pub mod pdf;
pub mod search;
pub mod validation;
pub mod wire;
