//! Address Book TUI
//!
//! Loads a batch of random users and shows them as an address list. Each
//! entry has a `Show Info` toggle that appends the user's full record.
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: user intents (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: drawing (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: config, logging and the user source (`backend/`)
//!
//! ## Startup
//!
//! 1. install the file logger
//! 2. load the config
//! 3. build the user source and the page controller
//! 4. init the terminal, run the main loop, restore the terminal
//!
//! Any failure is reported on stderr after the terminal is restored, and the
//! process exits with a non-zero status.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use address_book_core::{PageController, BATCH_SIZE};
use anyhow::Result;

use backend::{build_user_source, init_logging, ConfigService, LocalConfigService};
use util::{init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Address book failed: {e:#}");
            eprintln!("address-book: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // 1. Logging
    let log_path = init_logging()?;
    if let Some(path) = &log_path {
        log::info!("Logging to {}", path.display());
    }

    // 2. Config
    let config = LocalConfigService::new().load()?;
    view::theme::set_theme(config.theme);

    // 3. Page controller
    let source = build_user_source(&config)?;
    let mut app = model::App::new(PageController::new(source, BATCH_SIZE));

    // 4. Terminal; restored whether or not the loop succeeded
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app).await;
    restore_terminal(&mut terminal)?;

    result
}
