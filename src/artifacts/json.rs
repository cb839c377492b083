//! JSON pre-formatting
//!
//! Re-indents JSON documents before they are compared, so that two documents
//! differing only in whitespace or layout diff as equal.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonFormatError {
    #[error("invalid JSON: {0}")]
    Invalid(String),
}

/// Pretty-print `text` with two-space indentation.
///
/// Blank text formats to the empty string instead of failing.
pub fn format_json(text: &str) -> Result<String, JsonFormatError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    let value = serde_json::from_str::<serde_json::Value>(trimmed)
        .map_err(|e| JsonFormatError::Invalid(e.to_string()))?;

    serde_json::to_string_pretty(&value).map_err(|e| JsonFormatError::Invalid(e.to_string()))
}
