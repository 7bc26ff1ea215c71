//! Test helpers: a canned user source and preloaded apps

use std::sync::Arc;

use address_book_core::{PageController, UserBatch, UserRecord, BATCH_SIZE};
use address_book_provider::{Result, UserSource};
use async_trait::async_trait;
use serde_json::json;

use crate::model::App;

pub struct CannedSource {
    batch: UserBatch,
}

#[async_trait]
impl UserSource for CannedSource {
    fn id(&self) -> &'static str {
        "canned"
    }

    async fn fetch_batch(&self, _count: u32) -> Result<UserBatch> {
        Ok(self.batch.clone())
    }

    async fn fetch_user(&self) -> Result<UserRecord> {
        Ok(self.batch[0].clone())
    }
}

/// Source whose fetch never completes.
pub struct StalledSource;

#[async_trait]
impl UserSource for StalledSource {
    fn id(&self) -> &'static str {
        "stalled"
    }

    async fn fetch_batch(&self, _count: u32) -> Result<UserBatch> {
        std::future::pending().await
    }

    async fn fetch_user(&self) -> Result<UserRecord> {
        std::future::pending().await
    }
}

pub fn record(first: &str) -> UserRecord {
    UserRecord::from_value(json!({
        "name": { "title": "Mx", "first": first, "last": "Doe" },
        "email": format!("{}@example.com", first.to_lowercase()),
        "picture": { "thumbnail": format!("https://img.example/thumb/{first}.jpg") }
    }))
    .unwrap()
}

/// Controller over a canned source serving the given users.
pub fn canned_controller(names: &[&str]) -> PageController {
    let batch = names.iter().map(|name| record(name)).collect();
    PageController::new(Arc::new(CannedSource { batch }), BATCH_SIZE)
}

/// App whose page load already completed with the given users.
pub fn test_app(names: &[&str]) -> App {
    let mut app = App::new(canned_controller(names));

    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(app.controller.run())
        .unwrap();
    app.address_list.loading = false;
    app
}
