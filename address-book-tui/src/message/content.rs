//! Address list messages

/// Address list message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    /// Select the previous item
    SelectPrevious,
    /// Select the next item
    SelectNext,
    /// Jump to the first item
    SelectFirst,
    /// Jump to the last item
    SelectLast,
    /// Activate the selected item's `Show Info` toggle
    Activate,
}
