//! New Item Form Component
//!
//! Text input plus submit button appending an item to the checklist.

use leptos::prelude::*;

use crate::store::{
    store_add_draft, store_set_draft, use_checklist_store, ChecklistStateStoreFields,
};

/// Form for adding items; blank input is ignored
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_checklist_store();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_add_draft(&store);
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="Add item..."
                    prop:value=move || store.draft().read().as_str().to_string()
                    on:input=move |ev| store_set_draft(&store, event_target_value(&ev))
                />
                <button type="submit">"Add Item"</button>
            </div>
        </form>
    }
}
