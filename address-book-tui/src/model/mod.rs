//! Model layer: application state
//!
//! Plain data only. The update layer is the single place that mutates it,
//! and the view layer reads it to draw each frame.
//!
//! - `App`: quit flag, status message and the page controller, which owns
//!   the visual tree the view draws
//! - `AddressListState`: selected item and loading flag

mod address_list;
mod app;

pub use address_list::AddressListState;
pub use app::App;
