//! Navbar Component
//!
//! Horizontal links switching between the top-level pages.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="navbar">
            <ul class="nav-list">
                {Page::ALL.iter().map(|&page| {
                    let is_active = move || ctx.current_page.get() == page;
                    view! {
                        <li>
                            <a
                                href="#"
                                class=move || {
                                    if is_active() { "nav-link active" } else { "nav-link" }
                                }
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.navigate(page);
                                }
                            >
                                {page.label()}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
