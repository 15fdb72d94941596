//! Checklist Store
//!
//! Owns the title and the ordered items of one checklist and applies user actions to them.
//! Every mutation either applies fully or returns a [`ChecklistError`] without touching state.

use crate::error::{ChecklistError, ChecklistResult};
use crate::item::{ChecklistItem, ItemId};
use crate::progress::Progress;

/// A checklist being built: free-text title plus items in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    title: String,
    items: Vec<ChecklistItem>,
    /// Next raw id; only ever increases so removed ids are never handed out again
    next_id: u64,
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title. No validation.
    pub fn set_title(&mut self, new_title: impl Into<String>) {
        self.title = new_title.into();
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new pending item.
    ///
    /// The text is accepted when it is non-empty after trimming and is stored as given.
    pub fn add_item(&mut self, raw_text: &str) -> ChecklistResult<&ChecklistItem> {
        if raw_text.trim().is_empty() {
            log::debug!("rejected add: empty input");
            return Err(ChecklistError::EmptyInput);
        }

        let id = self.allocate_id();
        self.items.push(ChecklistItem::new(id, raw_text.to_string()));
        log::debug!("added item {} ({} total)", id, self.items.len());

        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    /// Flip the completion flag of one item
    pub fn toggle_completed(&mut self, id: ItemId) -> ChecklistResult<()> {
        let item = self.find_mut(id)?;
        item.completed = !item.completed;
        log::debug!("toggled item {} -> {:?}", id, item.state());
        Ok(())
    }

    /// Remove one item, keeping the order of the rest
    pub fn remove_item(&mut self, id: ItemId) -> ChecklistResult<ChecklistItem> {
        let index = self.position_of(id)?;
        let removed = self.items.remove(index);
        log::debug!("removed item {} ({} left)", id, self.items.len());
        Ok(removed)
    }

    /// Store `text` verbatim as the item's description, overwriting any previous one
    pub fn set_description(&mut self, id: ItemId, text: impl Into<String>) -> ChecklistResult<()> {
        let item = self.find_mut(id)?;
        item.description = Some(text.into());
        log::debug!("set description of item {}", id);
        Ok(())
    }

    /// Completed and total counts of the current items
    pub fn progress(&self) -> Progress {
        let completed = self.items.iter().filter(|item| item.is_completed()).count();
        Progress::new(completed, self.items.len())
    }

    fn allocate_id(&mut self) -> ItemId {
        self.next_id += 1;
        ItemId::new(self.next_id)
    }

    /// Index of the item, logging the rejection when it is absent
    fn position_of(&self, id: ItemId) -> ChecklistResult<usize> {
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => Ok(index),
            None => {
                log::debug!("rejected operation: item {} not found", id);
                Err(ChecklistError::NotFound(id))
            }
        }
    }

    fn find_mut(&mut self, id: ItemId) -> ChecklistResult<&mut ChecklistItem> {
        let index = self.position_of(id)?;
        Ok(&mut self.items[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::CompletionState;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    thread_local! {
        static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    /// Collects formatted records per test thread
    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            CAPTURED.with(|lines| lines.borrow_mut().push(record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;

    fn captured_lines() -> Vec<String> {
        // Another test may have installed it already
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Debug);
        CAPTURED.with(|lines| lines.borrow_mut().drain(..).collect())
    }

    fn checklist_with(texts: &[&str]) -> (Checklist, Vec<ItemId>) {
        let mut checklist = Checklist::new();
        let ids = texts
            .iter()
            .map(|text| checklist.add_item(text).unwrap().id())
            .collect();
        (checklist, ids)
    }

    #[test]
    fn test_new_checklist_is_empty() {
        let checklist = Checklist::new();
        assert!(checklist.is_empty());
        assert_eq!(checklist.title(), "");
        assert_eq!(checklist.progress(), Progress::new(0, 0));
    }

    #[test]
    fn test_set_title_replaces_unconditionally() {
        let mut checklist = Checklist::new();
        checklist.set_title("Groceries");
        checklist.set_title("");
        assert_eq!(checklist.title(), "");
        checklist.set_title("  Weekend  ");
        assert_eq!(checklist.title(), "  Weekend  ");
    }

    #[test]
    fn test_add_item_appends_pending_item() {
        let mut checklist = Checklist::new();
        let item = checklist.add_item("Buy milk").unwrap().clone();

        assert_eq!(item.text(), "Buy milk");
        assert!(!item.is_completed());
        assert_eq!(item.description(), None);
        assert_eq!(checklist.items(), &[item]);
    }

    #[test]
    fn test_add_item_keeps_text_as_typed() {
        let mut checklist = Checklist::new();
        let item = checklist.add_item("  Walk dog ").unwrap();
        assert_eq!(item.text(), "  Walk dog ");
    }

    #[test]
    fn test_add_blank_is_rejected() {
        let (mut checklist, _) = checklist_with(&["Buy milk"]);
        let before = checklist.clone();

        for blank in ["", "   ", "\t\n"] {
            assert_eq!(checklist.add_item(blank).unwrap_err(), ChecklistError::EmptyInput);
        }
        assert_eq!(checklist, before);
    }

    #[test]
    fn test_ids_are_distinct() {
        let (checklist, ids) = checklist_with(&["a", "b", "c", "d"]);
        assert_eq!(checklist.len(), 4);
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id));
        }
    }

    #[test]
    fn test_removed_ids_are_not_reused() {
        let (mut checklist, ids) = checklist_with(&["a", "b"]);
        checklist.remove_item(ids[1]).unwrap();
        let fresh = checklist.add_item("c").unwrap().id();
        assert!(!ids.contains(&fresh));
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let (mut checklist, ids) = checklist_with(&["a", "b"]);

        checklist.toggle_completed(ids[0]).unwrap();
        assert_eq!(checklist.get(ids[0]).unwrap().state(), CompletionState::Completed);
        assert_eq!(checklist.get(ids[1]).unwrap().state(), CompletionState::Pending);

        checklist.toggle_completed(ids[0]).unwrap();
        assert!(!checklist.get(ids[0]).unwrap().is_completed());
    }

    #[test]
    fn test_remove_preserves_order() {
        let (mut checklist, ids) = checklist_with(&["a", "b", "c"]);
        let removed = checklist.remove_item(ids[1]).unwrap();
        assert_eq!(removed.text(), "b");

        let texts: Vec<&str> = checklist.items().iter().map(|i| i.text()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn test_removed_item_is_not_addressable() {
        let (mut checklist, ids) = checklist_with(&["a"]);
        let id = ids[0];
        checklist.remove_item(id).unwrap();

        assert_eq!(checklist.toggle_completed(id), Err(ChecklistError::NotFound(id)));
        assert_eq!(checklist.remove_item(id), Err(ChecklistError::NotFound(id)));
        assert_eq!(checklist.set_description(id, "x"), Err(ChecklistError::NotFound(id)));
        assert!(checklist.get(id).is_none());
    }

    #[test]
    fn test_every_not_found_rejection_is_logged() {
        let (mut checklist, ids) = checklist_with(&["a"]);
        let id = ids[0];
        checklist.remove_item(id).unwrap();
        captured_lines();

        let _ = checklist.remove_item(id);
        let _ = checklist.toggle_completed(id);
        let _ = checklist.set_description(id, "x");

        let expected = format!("rejected operation: item {} not found", id);
        let lines = captured_lines();
        assert_eq!(lines.iter().filter(|line| **line == expected).count(), 3);
    }

    #[test]
    fn test_set_description_is_verbatim() {
        let (mut checklist, ids) = checklist_with(&["a"]);

        checklist.set_description(ids[0], "  two liters ").unwrap();
        assert_eq!(checklist.get(ids[0]).unwrap().description(), Some("  two liters "));

        checklist.set_description(ids[0], "").unwrap();
        assert_eq!(checklist.get(ids[0]).unwrap().description(), Some(""));
    }

    #[test]
    fn test_progress_counts_completed() {
        let (mut checklist, ids) = checklist_with(&["a", "b", "c", "d"]);
        for id in &ids[..3] {
            checklist.toggle_completed(*id).unwrap();
        }
        assert_eq!(checklist.progress().as_tuple(), (3, 4));
    }
}
