//! Export functionality for computed summaries

pub mod csv;

pub use csv::export_to_csv;
