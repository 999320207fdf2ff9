pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod report;
pub mod source;
mod utils;

pub use audit::{audit, summarize, AuditResult, FieldSpec, Record};
pub use error::AuditError;
pub use source::{audit_source, CsvSource};
