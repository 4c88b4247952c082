use thiserror::Error;

/// A caller-supplied parameter outside its contract.
///
/// Carries the offending field name so callers can point at the input that needs fixing.
/// Values are never silently clamped into range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
