pub mod batch;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod input;

pub use config::Config;
pub use convert::validator::{validate, CaseInput};
pub use convert::{convert, to_camel_case, to_dot_case, to_kebab_case, to_snake_case, Style};
pub use error::CaseError;

/// Outcome of converting every record of one batch.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub converted_count: usize,
    pub failed_count: usize,
    pub records: Vec<RecordOutcome>,
}

#[derive(Debug, Clone)]
pub struct RecordOutcome {
    /// 1-indexed position of the record in its source.
    pub index: usize,
    /// Display form of the raw input.
    pub input: String,
    pub style: Style,
    pub output: Result<String, CaseError>,
}
