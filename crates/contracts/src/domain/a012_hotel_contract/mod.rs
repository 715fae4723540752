pub mod aggregate;
pub mod contract_pdf;
