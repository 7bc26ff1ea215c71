//! Message layer: what the user asked for
//!
//! The event layer turns key presses into messages; the update layer
//! consumes them and changes the model.

mod app;
mod content;

pub use app::AppMessage;
pub use content::ContentMessage;
