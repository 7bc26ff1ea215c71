//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use address_book_provider::SourceError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No element carries the given id
    #[error("Lookup error: no element with id '{0}'")]
    LookupError(String),

    /// The node is not an element (text nodes have no children)
    #[error("Node {0} is not an element")]
    NotAnElement(usize),

    /// The node id does not belong to this document
    #[error("Unknown node {0}")]
    UnknownNode(usize),

    /// Appending the node would give it a second parent or create a cycle
    #[error("Node {0} cannot be appended at this position")]
    HierarchyRequest(usize),

    /// User source error (converted from the provider library)
    #[error("{0}")]
    Source(#[from] SourceError),
}

impl CoreError {
    /// Whether it is expected behavior, used to pick the log level.
    ///
    /// `warn` when `true`, `error` when `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::LookupError(_) => true,
            Self::NotAnElement(_) | Self::UnknownNode(_) | Self::HierarchyRequest(_) => false,
            Self::Source(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_errors_convert_and_display_unchanged() {
        let source = SourceError::NetworkError {
            provider: "randomuser".to_string(),
            detail: "connection refused".to_string(),
        };
        let core: CoreError = source.clone().into();

        assert_eq!(core.to_string(), source.to_string());
        assert!(!core.is_expected());
    }

    #[test]
    fn lookup_error_is_expected() {
        let e = CoreError::LookupError("person-9".to_string());
        assert_eq!(e.to_string(), "Lookup error: no element with id 'person-9'");
        assert!(e.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = CoreError::LookupError("address-list".to_string());
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "LookupError");
        assert_eq!(json["details"], "address-list");
    }
}
