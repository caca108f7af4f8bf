//! Input/output formats: the JSON wire payload and CSV plan export.

pub mod export;
pub mod payload;
