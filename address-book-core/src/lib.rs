//! Address Book Core Library
//!
//! Page logic for the random-user address list:
//! - an in-memory visual tree ([`Document`])
//! - the current batch of users ([`UserStore`])
//! - list item rendering and detail reveal
//! - page load orchestration ([`PageController`])
//!
//! The library does no drawing itself. A host renders the [`Document`] and
//! forwards toggle activations to the controller.

pub mod document;
pub mod error;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use document::{Document, NodeId};
pub use error::{CoreError, CoreResult, SourceError};
pub use services::{DetailRevealer, ListRenderer, PageController, UserStore};
pub use types::{ToggleHandler, UserBatch, UserRecord, ADDRESS_LIST_ID, BATCH_SIZE};
