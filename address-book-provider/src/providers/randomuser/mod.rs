//! randomuser.me source

mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::types::SourceOptions;

pub(crate) use types::RandomUserResponse;

pub(crate) const PROVIDER_NAME: &str = "randomuser";

/// User source backed by the randomuser.me API (or any endpoint speaking the
/// same `{"results": [...]}` format).
pub struct RandomUserProvider {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
}

impl RandomUserProvider {
    /// Source pointed at the public endpoint, without timeouts.
    pub fn new() -> Result<Self> {
        Self::with_options(SourceOptions::default())
    }

    pub fn with_options(options: SourceOptions) -> Result<Self> {
        let client = HttpUtils::build_client(&options, PROVIDER_NAME)?;
        Ok(Self {
            client,
            endpoint: options.endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
