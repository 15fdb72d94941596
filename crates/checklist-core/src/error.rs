//! Error types for checklist operations and configuration

use thiserror::Error;

use crate::item::ItemId;

/// Rejections raised by [`Checklist`](crate::Checklist) mutations.
///
/// Both variants are recoverable: a rejected operation leaves the checklist untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecklistError {
    /// Attempted to add an item whose text is blank after trimming
    #[error("item text is empty")]
    EmptyInput,

    /// No item with this id is present (never existed or already removed)
    #[error("item {0} not found")]
    NotFound(ItemId),
}

/// Result type alias for checklist operations
pub type ChecklistResult<T> = std::result::Result<T, ChecklistError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration text is not valid JSON for the expected shape.
    #[error("Configuration parse error: {0}")]
    Parse(String),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
