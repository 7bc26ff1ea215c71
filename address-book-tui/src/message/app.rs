//! Top-level application message

use super::ContentMessage;

/// Application message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Leave the application
    Quit,

    /// Address list message
    Content(ContentMessage),

    /// No-op (ignored events)
    Noop,
}
