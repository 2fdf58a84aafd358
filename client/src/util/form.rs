//! Small input-normalization helpers for the auth and profile forms.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Trim `raw`; blank input becomes `None`.
pub fn optional_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Trim `raw`, rejecting blank input with `message`.
///
/// # Errors
///
/// Returns `message` when the trimmed value is empty.
pub fn required_field(raw: &str, message: &'static str) -> Result<String, &'static str> {
    optional_field(raw).ok_or(message)
}
