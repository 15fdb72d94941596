//! Checklist Builder App
//!
//! Navbar on top, current page below.

use leptos::prelude::*;

use crate::components::{CreateChecklist, Homepage, Navbar};
use crate::config::AppConfig;
use crate::context::{AppContext, Page};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (current_page, set_current_page) = signal(Page::Home);

    // Provide context to all children
    let ctx = AppContext::new((current_page, set_current_page));
    provide_context(ctx);
    provide_context(config);

    view! {
        <div class="app-layout">
            <Navbar />

            <main class="main-content">
                // Each page owns its state; switching pages drops the previous one
                {move || match ctx.current_page.get() {
                    Page::Home => view! { <Homepage /> }.into_any(),
                    Page::CreateChecklist => view! { <CreateChecklist /> }.into_any(),
                }}
            </main>
        </div>
    }
}
