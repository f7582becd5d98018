// ─────────────────────────────────────────────────────────────────────
// DECIDE — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all decision-core failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecideError {
    /// A condition parameter lies outside its domain, or a structural
    /// precondition (window larger than the trajectory) does not hold.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Connector token is not one of `ANDD`, `ORR`, `NOT_USED`.
    #[error("unknown logical connector: {0:?}")]
    UnknownConnector(String),

    /// Malformed parameter or matrix document.
    #[error("config error: {0}")]
    Config(String),

    /// Matrix or vector document with the wrong dimensions.
    #[error("shape error: {0}")]
    Shape(String),
}

impl DecideError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// True for the evaluation-time parameter failure.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

pub type DecideResult<T> = Result<T, DecideError>;
