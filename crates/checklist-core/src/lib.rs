//! Checklist Core
//!
//! In-memory state for building a checklist:
//! - item: checklist item entity and its id
//! - checklist: the store applying add/toggle/remove/describe actions
//! - progress: completion counts and display bands

mod checklist;
mod error;
mod item;
pub mod progress;

pub use checklist::Checklist;
pub use error::{ChecklistError, ChecklistResult, ConfigError};
pub use item::{ChecklistItem, CompletionState, ItemId};
pub use progress::{Progress, ProgressBand, ProgressConfig, ProgressPalette, ProgressThresholds};
