//! Update layer: the only place the model changes
//!
//! `update` matches on the message; list messages are delegated to
//! `content`. Control returns to the main loop, which redraws from the
//! updated model.

mod content;

use crate::message::AppMessage;
use crate::model::App;

/// Apply a message to the app state
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }
        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }
        AppMessage::Noop => {}
    }
}
