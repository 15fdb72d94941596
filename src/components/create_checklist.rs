//! Create Checklist Page
//!
//! Owns a fresh checklist store for as long as the page is shown.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ChecklistView, NewItemForm, ProgressBar};
use crate::store::{store_set_title, ChecklistState, ChecklistStateStoreFields, ChecklistStore};

#[component]
pub fn CreateChecklist() -> impl IntoView {
    let store: ChecklistStore = Store::new(ChecklistState::default());
    provide_context(store);
    log::debug!("Checklist page mounted with an empty checklist");
    on_cleanup(|| log::debug!("Checklist page unmounted, checklist dropped"));

    let progress = Memo::new(move |_| store.checklist().read().progress());

    view! {
        <div class="checklist-container">
            <h1 class="checklist-heading">"Create Your Checklist"</h1>

            <input
                type="text"
                class="title-input"
                placeholder="Checklist title"
                prop:value=move || store.checklist().read().title().to_string()
                on:input=move |ev| store_set_title(&store, event_target_value(&ev))
            />

            <NewItemForm />

            <ProgressBar progress=progress />

            <ChecklistView />
        </div>
    }
}
