//! Checklist Page Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! A store is created per checklist page and dropped with it.

use checklist_core::{Checklist, ChecklistResult, ItemId};
use leptos::prelude::*;
use reactive_stores::Store;

/// State of the create-checklist page
#[derive(Clone, Debug, Default, Store)]
pub struct ChecklistState {
    /// Title and items being built
    pub checklist: Checklist,
    /// Text currently typed in the new-item input
    pub draft: String,
}

/// Type alias for the store
pub type ChecklistStore = Store<ChecklistState>;

/// Get the checklist store from context
pub fn use_checklist_store() -> ChecklistStore {
    expect_context::<ChecklistStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Rejections are expected from the UI (blank input, stale row); they are no-ops
fn ignore_rejection<T>(action: &str, result: ChecklistResult<T>) {
    if let Err(err) = result {
        log::debug!("Ignored {}: {}", action, err);
    }
}

/// Replace the checklist title
pub fn store_set_title(store: &ChecklistStore, title: String) {
    store.checklist().write().set_title(title);
}

/// Replace the draft text
pub fn store_set_draft(store: &ChecklistStore, text: String) {
    *store.draft().write() = text;
}

/// Add the draft as a new item and clear the draft on success
pub fn store_add_draft(store: &ChecklistStore) {
    let draft = store.draft().read_untracked().as_str().to_string();
    let result = store.checklist().write().add_item(&draft).map(|item| item.id());
    if result.is_ok() {
        store_set_draft(store, String::new());
    }
    ignore_rejection("add", result);
}

/// Flip the completion flag of an item
pub fn store_toggle_item(store: &ChecklistStore, id: ItemId) {
    let result = store.checklist().write().toggle_completed(id);
    ignore_rejection("toggle", result);
}

/// Remove an item by ID
pub fn store_remove_item(store: &ChecklistStore, id: ItemId) {
    let result = store.checklist().write().remove_item(id);
    ignore_rejection("remove", result);
}

/// Set the description of an item by ID
pub fn store_set_description(store: &ChecklistStore, id: ItemId, text: String) {
    let result = store.checklist().write().set_description(id, text);
    ignore_rejection("description update", result);
}
