//! Test helpers
//!
//! Stub user source and record factories.

use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;

use crate::error::SourceError;
use crate::types::{UserBatch, UserRecord};
use address_book_provider::{Result, UserSource};

// ===== Records =====

pub fn test_record(first: &str) -> UserRecord {
    UserRecord::from_value(json!({
        "gender": "female",
        "name": { "title": "Ms", "first": first, "last": "Tester" },
        "email": format!("{}@example.com", first.to_lowercase()),
        "location": { "street": { "number": 12, "name": "Main" }, "city": "Springfield" },
        "picture": {
            "large": format!("https://img.example/large/{first}.jpg"),
            "thumbnail": format!("https://img.example/thumb/{first}.jpg")
        }
    }))
    .unwrap()
}

pub fn test_batch(names: &[&str]) -> UserBatch {
    names.iter().map(|name| test_record(name)).collect()
}

// ===== StubUserSource =====

pub struct StubUserSource {
    outcome: std::result::Result<UserBatch, SourceError>,
    calls: AtomicUsize,
    last_count: AtomicU32,
}

impl StubUserSource {
    pub fn with_batch(batch: UserBatch) -> Self {
        Self::new(Ok(batch))
    }

    pub fn with_error(error: SourceError) -> Self {
        Self::new(Err(error))
    }

    fn new(outcome: std::result::Result<UserBatch, SourceError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_count: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Count passed to the most recent `fetch_batch`, if any.
    pub fn last_count(&self) -> Option<u32> {
        match self.last_count.load(Ordering::SeqCst) {
            0 => None,
            n => Some(n),
        }
    }
}

#[async_trait]
impl UserSource for StubUserSource {
    fn id(&self) -> &'static str {
        "stub"
    }

    async fn fetch_batch(&self, count: u32) -> Result<UserBatch> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_count.store(count, Ordering::SeqCst);
        self.outcome.clone()
    }

    async fn fetch_user(&self) -> Result<UserRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let batch = self.outcome.clone()?;
        batch.into_iter().next().ok_or_else(|| SourceError::DecodeError {
            provider: "stub".to_string(),
            detail: "`results` is empty".to_string(),
        })
    }
}
