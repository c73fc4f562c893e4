use serde::{Deserialize, Serialize};

/// Input for `create_survey`. `submit` requests direct submission, skipping
/// the draft stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSurvey {
    pub title: String,
    pub description: String,
    pub created_by: String,
    #[serde(default)]
    pub form_data: serde_json::Value,
    #[serde(default)]
    pub submit: bool,
}

/// Shallow-merge patch for `update_survey`. Absent fields are left as-is.
/// Status is deliberately not patchable; lifecycle changes go through the
/// submit/approve/reject operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub form_data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub content: String,
}
