//! Event layer: terminal input to messages
//!
//! `poll_event` waits for crossterm events; `handle_event` maps them to an
//! `AppMessage` for the update layer. `is_quit_event` lets the page
//! load be abandoned before the main loop starts. Bindings live in `keymap`.

mod handler;
mod keymap;

pub use handler::{handle_event, is_quit_event, poll_event};
