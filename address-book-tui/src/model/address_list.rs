//! Address list page state

/// Selection and load state of the address list
#[derive(Debug)]
pub struct AddressListState {
    /// Index of the selected item
    pub selected: usize,
    /// Whether the initial fetch is still running
    pub loading: bool,
}

impl AddressListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            loading: true,
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move down, stopping at the last of `len` items.
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }
}

impl Default for AddressListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = AddressListState::new();
        state.select_previous();
        assert_eq!(state.selected, 0);

        for _ in 0..10 {
            state.select_next(3);
        }
        assert_eq!(state.selected, 2);

        state.select_first();
        assert_eq!(state.selected, 0);
        state.select_last(8);
        assert_eq!(state.selected, 7);
    }

    #[test]
    fn empty_list_keeps_first_index() {
        let mut state = AddressListState::new();
        state.select_next(0);
        state.select_last(0);
        assert_eq!(state.selected, 0);
    }
}
