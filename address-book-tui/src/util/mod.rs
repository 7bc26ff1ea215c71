//! Util layer: terminal infrastructure and text helpers
//!
//! Nothing here knows about users or the address list.

mod terminal;
mod text;

pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::wrap_to_width;
