//! Toggle control handler

use crate::types::UserRecord;

/// Handler attached to a list item's toggle control.
///
/// Holds its own copy of the record, so revealing details never depends on
/// what the store holds at activation time.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleHandler {
    /// Id of the list item the details are appended to
    pub item_id: String,
    /// Record captured when the item was rendered
    pub record: UserRecord,
}

impl ToggleHandler {
    #[must_use]
    pub fn new(item_id: impl Into<String>, record: UserRecord) -> Self {
        Self {
            item_id: item_id.into(),
            record,
        }
    }
}
