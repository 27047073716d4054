use thiserror::Error;

/// Validation failures raised by the conversion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("input is null")]
    NullInput,
    #[error("input is undefined")]
    UndefinedInput,
    #[error("expected a string, got {found}")]
    TypeMismatch { found: &'static str },
    #[error("input is empty or whitespace only")]
    EmptyInput,
    #[error("input contains no valid characters")]
    NoValidCharacters,
}

impl CaseError {
    /// Stable tag used in machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            CaseError::NullInput => "null_input",
            CaseError::UndefinedInput => "undefined_input",
            CaseError::TypeMismatch { .. } => "type_mismatch",
            CaseError::EmptyInput => "empty_input",
            CaseError::NoValidCharacters => "no_valid_characters",
        }
    }
}
