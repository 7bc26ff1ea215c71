//! randomuser.me HTTP request methods

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::SourceErrorMapper;
use crate::types::UserRecord;

use super::{RandomUserProvider, RandomUserResponse};

impl RandomUserProvider {
    /// GET the endpoint, optionally asking for `count` results, and decode the
    /// `results` array.
    pub(crate) async fn get_results(&self, count: Option<u32>) -> Result<Vec<UserRecord>> {
        let mut request = self.client.get(&self.endpoint);
        let url = match count {
            Some(n) => {
                request = request.query(&[("results", n)]);
                format!("{}?results={n}", self.endpoint)
            }
            None => self.endpoint.clone(),
        };

        let (_status, body) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        let response: RandomUserResponse = HttpUtils::parse_json(&body, self.provider_name())?;

        if let Some(info) = &response.info {
            log::debug!(
                "[{}] seed={:?} results={:?} version={:?}",
                self.provider_name(),
                info.seed,
                info.results,
                info.version
            );
        }

        match (response.results, response.error) {
            (Some(results), _) => Ok(results),
            (None, Some(message)) => {
                log::error!("[{}] API error: {message}", self.provider_name());
                Err(self.decode_error(format!(
                    "response has no `results` field (API error: {message})"
                )))
            }
            (None, None) => Err(self.decode_error("response has no `results` field")),
        }
    }
}
