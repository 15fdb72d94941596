//! Progress Bar Component
//!
//! Horizontal bar whose width and color follow the completed share of items.

use checklist_core::{Progress, ProgressConfig};
use leptos::prelude::*;

use crate::context::use_app_config;

/// Inline style of the filled part. An empty checklist renders at 0% with no color.
pub fn fill_style(progress: Progress, config: &ProgressConfig) -> String {
    match (progress.percentage(), config.color_for(progress)) {
        (Some(percentage), Some(color)) => {
            format!("width: {:.1}%; background-color: {};", percentage, color)
        }
        _ => "width: 0%;".to_string(),
    }
}

/// CSS class of the filled part, carrying the band modifier when there are items
pub fn fill_class(progress: Progress, config: &ProgressConfig) -> String {
    match progress.band(&config.thresholds) {
        Some(band) => format!("progress-fill {}", band.css_class()),
        None => "progress-fill".to_string(),
    }
}

/// Summary shown under the bar
pub fn summary_label(progress: Progress) -> String {
    match progress.percentage() {
        Some(percentage) => format!(
            "{} of {} completed ({:.0}%)",
            progress.completed, progress.total, percentage
        ),
        None => "No items yet".to_string(),
    }
}

#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<Progress>) -> impl IntoView {
    let config = use_app_config().progress;
    let class_config = config.clone();

    view! {
        <div class="progress-section">
            <div class="progress-container">
                <div
                    class=move || fill_class(progress.get(), &class_config)
                    style=move || fill_style(progress.get(), &config)
                ></div>
            </div>
            <p class="item-count">{move || summary_label(progress.get())}</p>
        </div>
    }
}
