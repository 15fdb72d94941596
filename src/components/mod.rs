//! UI Components
//!
//! Leptos components for the navbar and the two pages.

mod checklist_item_row;
mod checklist_view;
mod create_checklist;
mod homepage;
mod navbar;
mod new_item_form;
mod progress_bar;

pub use checklist_item_row::ChecklistItemRow;
pub use checklist_view::ChecklistView;
pub use create_checklist::CreateChecklist;
pub use homepage::Homepage;
pub use navbar::Navbar;
pub use new_item_form::NewItemForm;
pub use progress_bar::ProgressBar;
