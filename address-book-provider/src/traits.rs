use async_trait::async_trait;

use crate::error::{Result, SourceError};
use crate::types::{UserBatch, UserRecord};

/// Error construction helpers shared by source implementations (internal)
pub(crate) trait SourceErrorMapper {
    /// Source identifier used in errors and logs
    fn provider_name(&self) -> &'static str;

    /// Shortcut: decode error
    fn decode_error(&self, detail: impl ToString) -> SourceError {
        SourceError::DecodeError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: rejected parameter
    fn invalid_parameter(&self, param: &str, detail: impl ToString) -> SourceError {
        SourceError::InvalidParameter {
            provider: self.provider_name().to_string(),
            param: param.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// A source of randomly generated users.
///
/// Both calls suspend until the complete response has been received and
/// decoded. No partial result is ever returned.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Source identifier
    fn id(&self) -> &'static str;

    /// Fetch `count` users in one request, in the order the service returns them.
    ///
    /// `count` must be positive; no upper bound is enforced here.
    async fn fetch_batch(&self, count: u32) -> Result<UserBatch>;

    /// Fetch a single user.
    async fn fetch_user(&self) -> Result<UserRecord>;
}
