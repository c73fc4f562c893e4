use thiserror::Error;

use crate::models::SurveyStatus;

/// Service-level failures. Everything here is recoverable; callers check
/// the result and carry on. There is no fatal error class.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("record not found")]
    NotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition {
        from: SurveyStatus,
        to: SurveyStatus,
    },

    #[error("storage failure on key '{0}'")]
    Storage(String),
}
