//! Checklist Item Row Component
//!
//! One item: checkbox, text, description toggle and delete button.

use checklist_core::ItemId;
use leptos::prelude::*;

use crate::store::{
    store_remove_item, store_set_description, store_toggle_item, use_checklist_store,
    ChecklistStateStoreFields,
};

/// A single item row, reading its fields from the store by id
#[component]
pub fn ChecklistItemRow(id: ItemId) -> impl IntoView {
    let store = use_checklist_store();
    let (show_description, set_show_description) = signal(false);

    // Text is fixed at creation
    let text = store
        .checklist()
        .read_untracked()
        .get(id)
        .map(|item| item.text().to_string())
        .unwrap_or_default();

    let completed = move || {
        store
            .checklist()
            .read()
            .get(id)
            .is_some_and(|item| item.is_completed())
    };
    let description = move || {
        store
            .checklist()
            .read()
            .get(id)
            .and_then(|item| item.description())
            .unwrap_or_default()
            .to_string()
    };
    let has_description = move || !description().is_empty();

    view! {
        <li class=move || if completed() { "item-row completed" } else { "item-row" }>
            <div class="item-main">
                // Checkbox
                <input
                    type="checkbox"
                    prop:checked=completed
                    on:change=move |_| store_toggle_item(&store, id)
                />

                // Text
                <span class="item-text">{text}</span>

                // Description toggle
                <button
                    class=move || {
                        let mut c = String::from("note-btn");
                        if show_description.get() { c.push_str(" active"); }
                        if has_description() { c.push_str(" has-note"); }
                        c
                    }
                    title="Description"
                    on:click=move |_| set_show_description.update(|open| *open = !*open)
                >
                    "✎"
                </button>

                // Delete button
                <button
                    class="delete-btn"
                    aria-label="delete"
                    on:click=move |_| store_remove_item(&store, id)
                >
                    "×"
                </button>
            </div>

            <Show when=move || show_description.get()>
                <textarea
                    class="description-textarea"
                    placeholder="Add a description..."
                    prop:value=description
                    on:input=move |ev| store_set_description(&store, id, event_target_value(&ev))
                ></textarea>
            </Show>
        </li>
    }
}
