//! User source construction

use std::sync::Arc;

use address_book_provider::{RandomUserProvider, UserSource};
use anyhow::{Context, Result};

use super::AppConfig;

/// HTTP user source configured from `config`.
pub fn build_user_source(config: &AppConfig) -> Result<Arc<dyn UserSource>> {
    let provider = RandomUserProvider::with_options(config.source_options())
        .context("Failed to create the user source")?;
    log::info!("User source endpoint: {}", provider.endpoint());
    Ok(Arc::new(provider))
}
