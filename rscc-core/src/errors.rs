use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RSCCError {
    #[error("Invalid input for {field}: {reason} (got {value})")]
    InvalidInput {
        field: String,
        value: f64,
        reason: String,
    },
    #[error("Could not parse scenario: {0}")]
    ScenarioParse(String),
    #[error("Could not read scenario file {path}: {message}")]
    Io { path: String, message: String },
}

impl RSCCError {
    /// Build an [`RSCCError::InvalidInput`] for `field`.
    pub fn invalid_input(field: &str, value: f64, reason: &str) -> Self {
        RSCCError::InvalidInput {
            field: field.to_string(),
            value,
            reason: reason.to_string(),
        }
    }

    /// Name of the offending field, if this error was raised by input validation.
    pub fn field(&self) -> Option<&str> {
        match self {
            RSCCError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Convenience type for `Result<T, RSCCError>`.
pub type RSCCResult<T> = Result<T, RSCCError>;
