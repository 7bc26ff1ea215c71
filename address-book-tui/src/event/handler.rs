//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::event::keymap::{any_matches, DefaultKeymap};
use crate::message::{AppMessage, ContentMessage};

/// Wait up to `timeout` for the next terminal event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Whether the event is a quit key press (q or Ctrl+C)
pub fn is_quit_event(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(key) if key.kind == KeyEventKind::Press
            && (DefaultKeymap::FORCE_QUIT.matches(key) || DefaultKeymap::QUIT.matches(key))
    )
}

/// Translate a terminal event into a message
pub fn handle_event(event: Event) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event),
        // Resize is picked up by the next draw
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent) -> AppMessage {
    // Only Press; Windows terminals also report Release and Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    handle_list_keys(&key)
}

fn handle_list_keys(key: &KeyEvent) -> AppMessage {
    let msg = if any_matches(&DefaultKeymap::UP, key) {
        ContentMessage::SelectPrevious
    } else if any_matches(&DefaultKeymap::DOWN, key) {
        ContentMessage::SelectNext
    } else if DefaultKeymap::FIRST.matches(key) {
        ContentMessage::SelectFirst
    } else if DefaultKeymap::LAST.matches(key) {
        ContentMessage::SelectLast
    } else if any_matches(&DefaultKeymap::ACTIVATE, key) {
        ContentMessage::Activate
    } else {
        return AppMessage::Noop;
    };
    AppMessage::Content(msg)
}
