//! Precondition failures raised before a chooser session starts.

use thiserror::Error;

/// Reasons a chooser refuses to start.
///
/// Surface failures that happen after the first render never show up here;
/// they are reported to the fault sink and end the session quietly.
#[derive(Debug, Error)]
pub enum ChooserError {
    #[error("page size must be between 1 and {max}, got {got}")]
    InvalidPageSize { got: usize, max: usize },

    #[error("invalid control id `{0}`")]
    InvalidControlId(String),

    #[error("control id `{0}` is already used by an active chooser")]
    ControlIdInUse(String),

    #[error("page {page} is out of range for {page_count} page(s)")]
    PageOutOfRange { page: usize, page_count: usize },

    #[error("duplicate option value `{0}`")]
    DuplicateValue(String),

    #[error("invalid option `{value}`: {reason}")]
    InvalidItem { value: String, reason: &'static str },

    #[error("failed to render the chooser")]
    Render(#[source] anyhow::Error),
}
