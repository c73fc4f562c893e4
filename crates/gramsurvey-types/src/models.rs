use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Surveyor,
    Supervisor,
}

/// Account record. Seed data only; the service never creates or mutates
/// users at runtime. Passwords are stored and compared in plaintext and are
/// not a security mechanism.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Survey lifecycle states. `Approved` and `Rejected` are terminal except
/// for the rejected → submitted resubmission path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl SurveyStatus {
    /// Validates a lifecycle transition, returning the target state or an
    /// `InvalidTransition` error. This is the only path by which a survey's
    /// status may change.
    pub fn transition(self, to: SurveyStatus) -> Result<SurveyStatus, ServiceError> {
        use SurveyStatus::*;
        match (self, to) {
            (Draft, Submitted) => Ok(to),
            // Resubmission after rejection re-enters review.
            (Rejected, Submitted) => Ok(to),
            (Submitted, Approved) | (Submitted, Rejected) => Ok(to),
            (from, to) => Err(ServiceError::InvalidTransition { from, to }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SurveyStatus::Draft => "draft",
            SurveyStatus::Submitted => "submitted",
            SurveyStatus::Approved => "approved",
            SurveyStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for SurveyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A village-assessment record. `form_data` is free-form: the assessment
/// fields differ per survey type and are not validated by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub status: SurveyStatus,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub form_data: serde_json::Value,
}

/// Inbox message between a surveyor and a supervisor. Immutable once sent
/// except for the `read` flag, which flips false → true exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub from: String,
    pub to: String,
    pub subject: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

/// Per-status survey counts, recomputed on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyStats {
    pub total: usize,
    pub draft: usize,
    pub submitted: usize,
    pub approved: usize,
    pub rejected: usize,
}
