use gramsurvey_types::error::ServiceError;
use gramsurvey_types::models::User;
use tracing::info;

use crate::{CURRENT_USER_KEY, SurveyService, USERS_KEY};

impl SurveyService {
    /// Case-sensitive exact match on username and password against the
    /// `users` collection. On success the user becomes the active session.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<User, ServiceError> {
        let users: Vec<User> = self.load(USERS_KEY);
        let user = users
            .into_iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or(ServiceError::InvalidCredentials)?;

        if !self.store().set(CURRENT_USER_KEY, &user) {
            return Err(ServiceError::Storage(CURRENT_USER_KEY.to_string()));
        }

        info!("Session started for '{}'", user.username);
        Ok(user)
    }

    /// Clears the active session. Always succeeds; there is nothing useful
    /// a caller could do with a failed logout.
    pub fn end_session(&self) {
        self.store().remove(CURRENT_USER_KEY);
    }

    pub fn current_session(&self) -> Option<User> {
        self.store().get(CURRENT_USER_KEY)
    }
}
