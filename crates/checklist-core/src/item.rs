//! Checklist Item Entity
//!
//! A single line of a checklist: immutable text, a completion flag and an optional description.

use std::fmt;

/// Opaque item identifier, unique within one checklist for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Observable completion state of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionState {
    Pending,
    Completed,
}

/// A checklist item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    id: ItemId,
    text: String,
    /// Completion status
    pub(crate) completed: bool,
    /// Free-text note; `Some("")` is kept distinct from `None`
    pub(crate) description: Option<String>,
}

impl ChecklistItem {
    /// Create a pending item with no description
    pub(crate) fn new(id: ItemId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            description: None,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn state(&self) -> CompletionState {
        if self.completed {
            CompletionState::Completed
        } else {
            CompletionState::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = ChecklistItem::new(ItemId::new(1), "Test item".to_string());
        assert_eq!(item.id().get(), 1);
        assert_eq!(item.text(), "Test item");
        assert!(!item.is_completed());
        assert_eq!(item.description(), None);
        assert_eq!(item.state(), CompletionState::Pending);
    }

    #[test]
    fn test_state_follows_completed_flag() {
        let mut item = ChecklistItem::new(ItemId::new(7), "Walk dog".to_string());
        item.completed = true;
        assert_eq!(item.state(), CompletionState::Completed);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ItemId::new(42).to_string(), "#42");
    }
}
