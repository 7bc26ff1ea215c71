//! randomuser.me `UserSource` implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{SourceErrorMapper, UserSource};
use crate::types::{UserBatch, UserRecord};

use super::{PROVIDER_NAME, RandomUserProvider};

impl SourceErrorMapper for RandomUserProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

#[async_trait]
impl UserSource for RandomUserProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_batch(&self, count: u32) -> Result<UserBatch> {
        if count == 0 {
            return Err(self.invalid_parameter("count", "must be a positive integer"));
        }

        let batch = self.get_results(Some(count)).await?;
        if batch.len() != count as usize {
            log::warn!(
                "[{PROVIDER_NAME}] requested {count} users, received {}",
                batch.len()
            );
        }
        Ok(batch)
    }

    async fn fetch_user(&self) -> Result<UserRecord> {
        self.get_results(None)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| self.decode_error("`results` is empty"))
    }
}
