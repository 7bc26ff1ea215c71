//! # address-book-provider
//!
//! Fetches randomly generated user records over HTTP.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use address_book_provider::{RandomUserProvider, UserSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = RandomUserProvider::new()?;
//!
//!     let batch = source.fetch_batch(8).await?;
//!     for user in &batch {
//!         println!("{} ({})", user.first_name(), user.picture_thumbnail_url());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, SourceError>`](SourceError):
//!
//! - [`SourceError::NetworkError`]: the request could not be completed
//! - [`SourceError::DecodeError`]: the body is not JSON of the expected shape
//! - [`SourceError::InvalidParameter`]: rejected before sending
//!
//! Nothing is retried.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{Result, SourceError};

pub use http_client::timeout_from_secs;

pub use traits::UserSource;

pub use types::{DEFAULT_ENDPOINT, SourceOptions, UserBatch, UserRecord};

pub use providers::RandomUserProvider;
