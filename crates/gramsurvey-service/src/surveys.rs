use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use gramsurvey_types::error::ServiceError;
use gramsurvey_types::models::{Survey, SurveyStats, SurveyStatus};
use gramsurvey_types::requests::{NewSurvey, SurveyPatch};

use crate::{SURVEYS_KEY, SurveyService};

impl SurveyService {
    /// All surveys, or only those created by `owner`. The service makes no
    /// ordering guarantee; display layers sort by `created_at` themselves.
    pub fn list_surveys(&self, owner: Option<&str>) -> Vec<Survey> {
        let surveys: Vec<Survey> = self.load(SURVEYS_KEY);
        match owner {
            Some(username) => surveys
                .into_iter()
                .filter(|s| s.created_by == username)
                .collect(),
            None => surveys,
        }
    }

    pub fn get_survey(&self, id: Uuid) -> Result<Survey, ServiceError> {
        self.load::<Survey>(SURVEYS_KEY)
            .into_iter()
            .find(|s| s.id == id)
            .ok_or(ServiceError::NotFound)
    }

    /// Creates a survey in `Draft`, or directly in `Submitted` when the
    /// caller asks for immediate submission. Approval fields start empty.
    pub fn create_survey(&self, new: NewSurvey) -> Result<Survey, ServiceError> {
        let survey = Survey {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            created_by: new.created_by,
            created_at: Utc::now(),
            status: if new.submit {
                SurveyStatus::Submitted
            } else {
                SurveyStatus::Draft
            },
            approved_by: None,
            approved_at: None,
            form_data: new.form_data,
        };

        let mut surveys: Vec<Survey> = self.load(SURVEYS_KEY);
        surveys.push(survey.clone());
        self.save(SURVEYS_KEY, &surveys)?;

        info!("Survey '{}' created by '{}'", survey.id, survey.created_by);
        Ok(survey)
    }

    /// Shallow-merges content fields into an existing survey. `id`,
    /// `created_by` and the lifecycle fields are untouchable here; status
    /// changes go through submit/approve/reject.
    pub fn update_survey(&self, id: Uuid, patch: SurveyPatch) -> Result<Survey, ServiceError> {
        self.mutate_survey(id, |survey| {
            if let Some(title) = patch.title {
                survey.title = title;
            }
            if let Some(description) = patch.description {
                survey.description = description;
            }
            if let Some(form_data) = patch.form_data {
                survey.form_data = form_data;
            }
            Ok(())
        })
    }

    /// Removes a survey unconditionally, regardless of status. Idempotent:
    /// deleting an absent id still reports success.
    pub fn delete_survey(&self, id: Uuid) -> bool {
        let mut surveys: Vec<Survey> = self.load(SURVEYS_KEY);
        surveys.retain(|s| s.id != id);
        self.save(SURVEYS_KEY, &surveys).is_ok()
    }

    /// Sends a survey into review: `Draft → Submitted`, or
    /// `Rejected → Submitted` for resubmission, which clears the previous
    /// review verdict.
    pub fn submit_survey(&self, id: Uuid) -> Result<Survey, ServiceError> {
        self.mutate_survey(id, |survey| {
            survey.status = survey.status.transition(SurveyStatus::Submitted)?;
            survey.approved_by = None;
            survey.approved_at = None;
            Ok(())
        })
    }

    pub fn approve_survey(&self, id: Uuid, approver: &str) -> Result<Survey, ServiceError> {
        self.finish_review(id, SurveyStatus::Approved, approver)
    }

    pub fn reject_survey(&self, id: Uuid, approver: &str) -> Result<Survey, ServiceError> {
        self.finish_review(id, SurveyStatus::Rejected, approver)
    }

    /// Per-status counts, optionally scoped to one owner. Recomputed on
    /// demand; the collections are far too small to justify cached counters.
    pub fn compute_stats(&self, owner: Option<&str>) -> SurveyStats {
        let mut stats = SurveyStats::default();
        for survey in self.list_surveys(owner) {
            stats.total += 1;
            match survey.status {
                SurveyStatus::Draft => stats.draft += 1,
                SurveyStatus::Submitted => stats.submitted += 1,
                SurveyStatus::Approved => stats.approved += 1,
                SurveyStatus::Rejected => stats.rejected += 1,
            }
        }
        stats
    }

    /// Terminal review verdict. Only a `Submitted` survey may be approved or
    /// rejected; the verdict records who acted and when.
    fn finish_review(
        &self,
        id: Uuid,
        verdict: SurveyStatus,
        approver: &str,
    ) -> Result<Survey, ServiceError> {
        let reviewed = self.mutate_survey(id, |survey| {
            survey.status = survey.status.transition(verdict)?;
            survey.approved_by = Some(approver.to_string());
            survey.approved_at = Some(Utc::now());
            Ok(())
        })?;
        info!("Survey '{}' {} by '{}'", id, verdict, approver);
        Ok(reviewed)
    }

    /// Read-modify-write of a single survey inside the whole-collection
    /// round trip. The collection is only written back if `f` succeeds.
    fn mutate_survey<F>(&self, id: Uuid, f: F) -> Result<Survey, ServiceError>
    where
        F: FnOnce(&mut Survey) -> Result<(), ServiceError>,
    {
        let mut surveys: Vec<Survey> = self.load(SURVEYS_KEY);
        let survey = surveys
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(ServiceError::NotFound)?;

        f(survey)?;
        let updated = survey.clone();
        self.save(SURVEYS_KEY, &surveys)?;
        Ok(updated)
    }
}
