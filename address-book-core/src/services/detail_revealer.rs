//! Toggle activation: reveal a user's full record

use crate::document::{Document, NodeId};
use crate::error::{CoreError, CoreResult};
use crate::types::UserRecord;

/// Appends the full record of a user to its list item.
///
/// Every activation appends another text node; nothing is deduplicated.
pub struct DetailRevealer;

impl DetailRevealer {
    /// Append the JSON text of `record` as the last child of `item_id`.
    ///
    /// Returns whether the document changed. An unknown `item_id` leaves the
    /// document untouched.
    pub fn reveal(document: &mut Document, item_id: &str, record: &UserRecord) -> bool {
        match Self::try_reveal(document, item_id, record) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Reveal skipped: {e}");
                false
            }
        }
    }

    /// Run the handler attached to `button`, if any.
    pub fn activate(document: &mut Document, button: NodeId) -> bool {
        let Some(handler) = document
            .element(button)
            .and_then(|element| element.handler())
            .cloned()
        else {
            return false;
        };
        Self::reveal(document, &handler.item_id, &handler.record)
    }

    fn try_reveal(document: &mut Document, item_id: &str, record: &UserRecord) -> CoreResult<()> {
        let item = document
            .get_element_by_id(item_id)
            .ok_or_else(|| CoreError::LookupError(item_id.to_string()))?;

        let details = document.create_text_node(record.to_json());
        document.append_child(item, details)
    }
}
