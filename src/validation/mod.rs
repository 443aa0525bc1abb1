// src/validation/mod.rs

//! Checks run on the input text before any rasterization happens.

use crate::core::{TextCircuitError, defaults};

/// Rejects text longer than `max_length` characters.
///
/// Length is counted in Unicode scalar values, not bytes. Falls back to
/// [`defaults::MAX_TEXT_LENGTH`] when no maximum is given.
pub fn check_length(text: &str, max_length: Option<usize>) -> Result<(), TextCircuitError> {
    let max = max_length.unwrap_or(defaults::MAX_TEXT_LENGTH);
    let length = text.chars().count();
    if length > max {
        return Err(TextCircuitError::InputTooLong { length, max });
    }
    Ok(())
}

/// Validates user-supplied text.
///
/// # Returns
/// * `Ok(())` if there is something to encode and it fits.
/// * `Err(TextCircuitError::NoInput)` for empty or whitespace-only text.
/// * `Err(TextCircuitError::InputTooLong)` if it exceeds the maximum.
pub fn validate_text(text: &str, max_length: Option<usize>) -> Result<(), TextCircuitError> {
    if text.trim().is_empty() {
        return Err(TextCircuitError::NoInput);
    }
    check_length(text, max_length)
}

/// Joins command-line words into the text to encode.
///
/// Words are separated by a single space and trailing whitespace is dropped.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    let joined = words.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
    joined.trim_end().to_string()
}
