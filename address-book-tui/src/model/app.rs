//! Application state

use address_book_core::{PageController, ADDRESS_LIST_ID};

use super::AddressListState;

/// Application state
pub struct App {
    /// Whether the main loop should stop
    pub should_quit: bool,

    /// Page logic: owns the document and the current batch
    pub controller: PageController,

    /// Address list page state
    pub address_list: AddressListState,

    /// Status bar message
    pub status_message: Option<String>,
}

impl App {
    pub fn new(controller: PageController) -> Self {
        Self {
            should_quit: false,
            controller,
            address_list: AddressListState::new(),
            status_message: None,
        }
    }

    /// Number of items currently rendered in the address list.
    pub fn item_count(&self) -> usize {
        let document = self.controller.document();
        document
            .get_element_by_id(ADDRESS_LIST_ID)
            .map_or(0, |list| document.child_elements(list, "li").count())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
