//! View layer: draw the model
//!
//! Read-only over `App`. The address list page walks the controller's
//! document tree, so whatever the core appended (items, revealed records)
//! shows up without the view knowing about users.

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
