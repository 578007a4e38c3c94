//! Allocation error types.

use serde::Serialize;
use thiserror::Error;

/// Allocation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    /// Configuration rejected before any allocation happened
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Weighted shares summed to a value that cannot be divided
    #[error("Calculation error: total shares resolved to {total_shares}")]
    ZeroShares { total_shares: f64 },

    /// Weight list handed to the apportionment routine is unusable
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),
}

impl AllocationError {
    /// Create an invalid input error.
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Short message suitable for showing next to the input form.
    pub fn client_message(&self) -> String {
        match self {
            AllocationError::InvalidInput {
                field: "prize" | "players",
                ..
            } => "Please enter a valid Prize Pool and Player count.".to_string(),
            AllocationError::ZeroShares { .. } => "Calculation Error: 0 Shares".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for allocation operations
pub type AllocationResult<T> = Result<T, AllocationError>;

/// Failure record handed to presenters in place of an [`Allocation`](super::Allocation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub error: String,
}

impl From<&AllocationError> for ErrorReport {
    fn from(err: &AllocationError) -> Self {
        Self {
            error: err.client_message(),
        }
    }
}
