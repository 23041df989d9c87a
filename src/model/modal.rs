//! Modal stack for managing overlays
//!
//! Overlays are tracked as an enum-based stack instead of a pile of
//! boolean flags; only the top modal receives input.

/// An overlay displayed on top of the active page
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Global search overlay across metrics, campaigns, insights, reports
    GlobalSearch {
        query: String,
        selected_index: usize,
    },
    /// Notification bell overlay
    Notifications { selected_index: usize },
    /// Status filter picker for the campaign table
    StatusFilter,
    /// Keyboard shortcut reference
    Help,
}

/// A stack of modal overlays, rendered bottom to top
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(Modal::Notifications { selected_index: 0 });

        assert_eq!(stack.pop(), Some(Modal::Notifications { selected_index: 0 }));
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_picker_modals_carry_no_state() {
        let mut stack = ModalStack::new();
        stack.push(Modal::StatusFilter);
        stack.push(Modal::Help);

        assert_eq!(stack.pop(), Some(Modal::Help));
        assert_eq!(stack.pop(), Some(Modal::StatusFilter));
    }

    #[test]
    fn test_modal_stack_top_mut() {
        let mut stack = ModalStack::new();
        stack.push(Modal::GlobalSearch {
            query: String::new(),
            selected_index: 0,
        });

        if let Some(Modal::GlobalSearch { query, .. }) = stack.top_mut() {
            query.push_str("roas");
        }

        assert_eq!(
            stack.top(),
            Some(&Modal::GlobalSearch {
                query: "roas".to_string(),
                selected_index: 0,
            })
        );
    }
}
