//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// Top-level pages reachable from the navbar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    CreateChecklist,
}

impl Page {
    /// Navbar order
    pub const ALL: [Page; 2] = [Page::Home, Page::CreateChecklist];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Homepage",
            Page::CreateChecklist => "Create Checklist",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown - read
    pub current_page: ReadSignal<Page>,
    /// Page currently shown - write
    set_current_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(current_page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            current_page: current_page.0,
            set_current_page: current_page.1,
        }
    }

    /// Switch pages. Re-selecting the current page keeps its state.
    pub fn navigate(&self, page: Page) {
        if self.current_page.get_untracked() == page {
            return;
        }
        log::debug!("Navigating to {:?}", page);
        self.set_current_page.set(page);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Get the loaded configuration
pub fn use_app_config() -> AppConfig {
    expect_context::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_labels_follow_navbar_order() {
        let labels: Vec<&str> = Page::ALL.iter().map(|page| page.label()).collect();
        assert_eq!(labels, vec!["Homepage", "Create Checklist"]);
    }
}
