use serde::{Deserialize, Serialize};

/// Unified error type for all user source operations.
///
/// Each variant carries a `provider` field identifying which source produced the
/// error, plus variant-specific context. All variants are serializable for
/// structured error reporting.
///
/// No variant is retried. A failed fetch is reported once and the caller decides
/// what to do with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum SourceError {
    /// The transport could not complete the request (DNS failure, connection
    /// refused, reset, or a configured timeout elapsing).
    NetworkError {
        /// Source that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The response body is not well-formed JSON, or does not have the expected
    /// shape (missing `results`, record without `picture.thumbnail`, ...).
    DecodeError {
        /// Source that produced the error.
        provider: String,
        /// Details about the decode failure.
        detail: String,
    },

    /// A request parameter was rejected before anything was sent.
    InvalidParameter {
        /// Source that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl SourceError {
    /// Whether the error stems from caller input rather than the remote side.
    ///
    /// Returns `true` when `warn` is the right log level, `false` for `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Source that produced the error.
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::DecodeError { provider, .. }
            | Self::InvalidParameter { provider, .. } => provider,
        }
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::DecodeError { provider, detail } => {
                write!(f, "[{provider}] Decode error: {detail}")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// Convenience type alias for `Result<T, SourceError>`.
pub type Result<T> = std::result::Result<T, SourceError>;
