//! Validation errors shared by the calculators

use thiserror::Error;

/// Reason a calculation could not be performed
///
/// Every variant describes input that is not (yet) computable. None of them
/// are fatal: callers collecting form input treat them as "nothing to show".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("invalid input '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl CalcError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { field, .. } => field,
        }
    }
}

/// Result alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Reject NaN and infinite values
pub(crate) fn require_finite(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid(field, format!("must be a finite number, got {}", value)))
    }
}
