//! Main loop
//!
//! The page is loaded before the list accepts input: a loading frame is
//! drawn and the controller fetches and renders the batch. Quit keys are
//! watched during the load, and pressing one abandons the request. Once the
//! page is loaded the loop starts polling keys.
//!
//! ```text
//! loop {
//!     terminal.draw(|f| view::render(&app, f))
//!     if app.should_quit { break }
//!     if let Some(event) = poll_event() {      // waits up to 100ms
//!         let msg = handle_event(event)
//!         update::update(&mut app, msg)
//!     }
//! }
//! ```

use std::future::Future;
use std::time::Duration;

use address_book_core::PageController;
use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How the initial page load ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Quit,
}

/// Load the page, then run the main loop until the user quits.
///
/// A failed load ends the application with that error.
pub async fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    terminal.draw(|frame| view::render(app, frame))?;

    if load_until(&mut app.controller, wait_for_quit_key()).await? == LoadOutcome::Quit {
        log::info!("Quit requested while loading");
        return Ok(());
    }
    app.address_list.loading = false;
    app.set_status(format!("Loaded {} users", app.controller.store().len()));

    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event);
            update::update(app, msg);
        }
    }

    Ok(())
}

/// Run the page load until it finishes or `quit` resolves.
///
/// On quit the in-flight request is dropped and the list stays empty.
pub async fn load_until<Q>(controller: &mut PageController, quit: Q) -> Result<LoadOutcome>
where
    Q: Future<Output = Result<()>>,
{
    tokio::select! {
        loaded = controller.run() => {
            loaded?;
            Ok(LoadOutcome::Loaded)
        }
        quit = quit => {
            quit?;
            Ok(LoadOutcome::Quit)
        }
    }
}

/// Resolves on the first quit key press.
///
/// A key polled in the window where the load completes may be lost.
async fn wait_for_quit_key() -> Result<()> {
    loop {
        let polled = tokio::task::spawn_blocking(|| event::poll_event(POLL_INTERVAL)).await??;
        if polled.as_ref().is_some_and(event::is_quit_event) {
            return Ok(());
        }
    }
}
