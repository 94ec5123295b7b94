//! Unified error hierarchy for fitcalc
//!
//! Every failure the library can report is a variant of [`TrainingError`],
//! so callers can match on the exact condition instead of parsing messages.

use thiserror::Error;

/// Top-level error type for all fitcalc operations
#[derive(Debug, Error)]
pub enum TrainingError {
    /// Workout code is not one of the known kinds
    #[error("Unrecognized workout kind: {code}")]
    UnrecognizedKind { code: String },

    /// Wrong number of sensor values for the selected kind
    #[error("Arity mismatch for {code}: expected {expected} values, got {actual}")]
    ArityMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// Calorie formula requested from a calculator that does not define one
    #[error("Calorie formula is not implemented for {training_type}")]
    UnimplementedCalories { training_type: String },

    /// Coefficient configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Package import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fitcalc operations
pub type Result<T> = std::result::Result<T, TrainingError>;

impl TrainingError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrainingError::UnrecognizedKind { .. } => ErrorSeverity::Warning,
            TrainingError::ArityMismatch { .. } => ErrorSeverity::Warning,
            TrainingError::Import(_) => ErrorSeverity::Warning,
            TrainingError::UnimplementedCalories { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TrainingError::UnrecognizedKind { code } => {
                format!(
                    "Unknown workout type '{}'. Expected one of: RUN, WLK, SWM.",
                    code
                )
            }
            TrainingError::ArityMismatch {
                code,
                expected,
                actual,
            } => {
                format!(
                    "Workout '{}' needs {} sensor values but {} were given.",
                    code, expected, actual
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Programmer error, the calculator itself is incomplete
    Critical,
    /// Error that prevents the operation
    Error,
    /// Bad input, the caller can fix it and retry
    Warning,
}
