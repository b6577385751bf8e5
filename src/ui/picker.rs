#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerItem {
    pub id: String,
    pub label: String,
}

impl PickerItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A single-selection list with wrap-around navigation.
#[derive(Debug, Clone)]
pub struct PickerState {
    pub title: String,
    pub items: Vec<PickerItem>,
    pub selected: usize,
}

impl PickerState {
    pub fn new<T: Into<String>>(title: T, items: Vec<PickerItem>, selected: usize) -> Self {
        let selected = selected.min(items.len().saturating_sub(1));
        Self {
            title: title.into(),
            items,
            selected,
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.items.get(self.selected).map(|i| i.id.as_str())
    }

    /// Select the item with `id`, leaving the selection alone if absent.
    pub fn select_id(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub fn move_up(&mut self) {
        if !self.items.is_empty() {
            if self.selected == 0 {
                self.selected = self.items.len() - 1;
            } else {
                self.selected -= 1;
            }
        }
    }

    pub fn move_down(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> PickerState {
        PickerState::new(
            "Pick",
            vec![
                PickerItem::new("a", "Alpha"),
                PickerItem::new("b", "Beta"),
                PickerItem::new("c", "Gamma"),
            ],
            0,
        )
    }

    #[test]
    fn navigation_wraps() {
        let mut state = picker();
        state.move_up();
        assert_eq!(state.selected_id(), Some("c"));
        state.move_down();
        assert_eq!(state.selected_id(), Some("a"));
    }

    #[test]
    fn select_id_ignores_unknown_ids() {
        let mut state = picker();
        assert!(state.select_id("b"));
        assert!(!state.select_id("z"));
        assert_eq!(state.selected_id(), Some("b"));
    }

    #[test]
    fn out_of_range_selection_is_clamped() {
        let state = PickerState::new("Pick", vec![PickerItem::new("only", "Only")], 7);
        assert_eq!(state.selected, 0);
    }
}
