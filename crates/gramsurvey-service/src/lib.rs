//! Survey lifecycle service: the sole reader and writer of the `users`,
//! `surveys`, `messages` and `currentUser` collections held in the record
//! store. Every mutation is a whole-collection read-modify-write; the
//! collections are small and there is a single writer, so no indexing or
//! partial-update machinery is warranted.

pub mod seed;

mod messages;
mod sessions;
mod surveys;

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

use gramsurvey_store::RecordStore;
use gramsurvey_types::error::ServiceError;

pub const USERS_KEY: &str = "users";
pub const SURVEYS_KEY: &str = "surveys";
pub const MESSAGES_KEY: &str = "messages";
pub const CURRENT_USER_KEY: &str = "currentUser";

pub struct SurveyService {
    store: RecordStore,
}

impl SurveyService {
    /// Wraps an already-open store, seeding default collections on first run.
    pub fn new(store: RecordStore) -> Self {
        seed::run(&store);
        Self { store }
    }

    /// Opens (or creates) the backing store at `path` and seeds it.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(RecordStore::open(path)?))
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// A missing collection reads as empty; the distinction never matters
    /// to callers.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.store.get(key).unwrap_or_default()
    }

    fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), ServiceError> {
        if self.store.set(key, &items) {
            Ok(())
        } else {
            Err(ServiceError::Storage(key.to_string()))
        }
    }
}
