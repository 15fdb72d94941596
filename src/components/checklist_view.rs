//! Checklist View Component
//!
//! Item rows in insertion order.

use leptos::prelude::*;

use crate::components::ChecklistItemRow;
use crate::store::{use_checklist_store, ChecklistStateStoreFields};

#[component]
pub fn ChecklistView() -> impl IntoView {
    let store = use_checklist_store();

    // Rows are keyed by id only so typing in a description does not rebuild the row
    let item_ids = move || {
        store
            .checklist()
            .read()
            .items()
            .iter()
            .map(|item| item.id())
            .collect::<Vec<_>>()
    };

    view! {
        <ul class="checklist">
            <For
                each=item_ids
                key=|id| *id
                children=move |id| view! { <ChecklistItemRow id=id /> }
            />
        </ul>
    }
}
