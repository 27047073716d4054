use crate::error::CaseError;
use serde_json::Value;

/// Anything that can be handed to a case conversion.
///
/// Plain strings are always text. JSON values and options carry the
/// null/undefined/non-text states the validator has to reject.
pub trait CaseInput {
    fn as_text(&self) -> Result<&str, CaseError>;
}

impl CaseInput for str {
    fn as_text(&self) -> Result<&str, CaseError> {
        Ok(self)
    }
}

impl CaseInput for String {
    fn as_text(&self) -> Result<&str, CaseError> {
        Ok(self.as_str())
    }
}

impl CaseInput for Value {
    fn as_text(&self) -> Result<&str, CaseError> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            Value::Null => Err(CaseError::NullInput),
            other => Err(CaseError::TypeMismatch {
                found: json_type_name(other),
            }),
        }
    }
}

impl<T: CaseInput> CaseInput for Option<T> {
    fn as_text(&self) -> Result<&str, CaseError> {
        match self {
            Some(inner) => inner.as_text(),
            None => Err(CaseError::UndefinedInput),
        }
    }
}

impl<T: CaseInput + ?Sized> CaseInput for &T {
    fn as_text(&self) -> Result<&str, CaseError> {
        (**self).as_text()
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reject malformed input before any processing.
pub fn validate<T: CaseInput + ?Sized>(input: &T) -> Result<&str, CaseError> {
    let text = input.as_text()?;
    if text.trim().is_empty() {
        return Err(CaseError::EmptyInput);
    }
    Ok(text)
}
