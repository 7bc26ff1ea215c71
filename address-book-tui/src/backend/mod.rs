//! Backend layer: services outside the UI
//!
//! - `config_service`: loads `AppConfig` from the config directory
//! - `logging`: installs the file-backed log subscriber
//! - `user_source`: builds the HTTP user source from the config
//!
//! The page logic itself lives in `address-book-core`; the UI talks to it
//! through the `PageController` held in the model.

mod config_service;
mod logging;
mod user_source;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use logging::init_logging;
pub use user_source::build_user_source;
