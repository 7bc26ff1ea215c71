//! Type definition module

mod toggle;

pub use toggle::ToggleHandler;

// Re-export the provider library's public types
pub use address_book_provider::{UserBatch, UserRecord};

/// Id of the container that holds every rendered list item.
pub const ADDRESS_LIST_ID: &str = "address-list";

/// Label of the toggle control on each list item.
pub const SHOW_INFO_LABEL: &str = "Show Info";

/// Number of users requested per page load.
pub const BATCH_SIZE: u32 = 8;

/// Element id of the list item at `index`.
pub fn item_id(index: usize) -> String {
    format!("person-{index}")
}
