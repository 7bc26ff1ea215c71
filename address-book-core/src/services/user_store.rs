//! Current batch of users

use crate::types::{UserBatch, UserRecord};

/// Holds the most recently fetched batch.
///
/// The batch is only ever replaced as a whole; it is never merged with or
/// appended to a previous one.
#[derive(Debug, Default)]
pub struct UserStore {
    batch: UserBatch,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored batch.
    pub fn replace(&mut self, batch: UserBatch) {
        self.batch = batch;
    }

    /// The current batch in original order.
    pub fn all(&self) -> &[UserRecord] {
        &self.batch
    }

    pub fn get(&self, index: usize) -> Option<&UserRecord> {
        self.batch.get(index)
    }

    pub fn len(&self) -> usize {
        self.batch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }
}
