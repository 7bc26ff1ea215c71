//! Page services: storage, rendering, reveal and load orchestration

mod detail_revealer;
mod list_renderer;
mod page_controller;
mod user_store;

pub use detail_revealer::DetailRevealer;
pub use list_renderer::ListRenderer;
pub use page_controller::PageController;
pub use user_store::UserStore;
