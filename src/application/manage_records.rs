//! Journal record CRUD use cases

use crate::domain::{find_emotion, JournalRecord};
use crate::error::{Result, ZenithError};
use crate::infrastructure::JournalStore;

/// Service for creating, listing and deleting journal records
pub struct RecordService<S: JournalStore> {
    store: S,
}

impl<S: JournalStore> RecordService<S> {
    /// Create a new record service
    pub fn new(store: S) -> Self {
        RecordService { store }
    }

    /// Create a record stamped now, resolving the emotion by catalog name
    pub fn add(&self, title: &str, content: &str, emotion: Option<&str>) -> Result<JournalRecord> {
        let emotion = match emotion {
            Some(name) => Some(
                find_emotion(name).ok_or_else(|| ZenithError::UnknownEmotion(name.to_string()))?,
            ),
            None => None,
        };

        let record = JournalRecord::new(title.to_string(), content.to_string(), emotion);
        self.store.add_record(record)
    }

    /// Current records, newest first
    pub fn list(&self) -> Result<Vec<JournalRecord>> {
        self.store.fetch_records()
    }

    /// Delete a record by id
    pub fn delete(&self, id: &str) -> Result<()> {
        self.store.delete_record(id)
    }
}
