//! Homepage Component

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn Homepage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="homepage">
            <h1>"Checklist Builder"</h1>
            <p>"Break anything down into small steps and tick them off as you go."</p>
            <button class="cta-btn" on:click=move |_| ctx.navigate(Page::CreateChecklist)>
                "Create a checklist"
            </button>
        </section>
    }
}
