use thiserror::Error;

/// Errors that can occur while handling artisan and client data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArtisanError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The backing key-value store could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// A persisted value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path to the invalid field (e.g. "hourly_rate").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<Vec<ValidationError>> for ArtisanError {
    fn from(errors: Vec<ValidationError>) -> Self {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        ArtisanError::Validation(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let e = ValidationError::new("hourly_rate", "must be positive");
        assert_eq!(e.to_string(), "hourly_rate: must be positive");
    }

    #[test]
    fn errors_join_into_single_validation_error() {
        let err: ArtisanError = vec![
            ValidationError::new("a", "bad"),
            ValidationError::new("b", "worse"),
        ]
        .into();
        assert_eq!(err.to_string(), "validation failed: a: bad; b: worse");
    }
}
