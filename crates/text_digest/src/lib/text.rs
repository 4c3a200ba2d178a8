//! # Text helpers
//!
//! Whitespace normalization and the length measures the driver takes against
//! normalized text. Character lengths count Unicode scalar values, not bytes.

use itertools::Itertools;

use crate::Error;

/// Collapses every run of whitespace to a single space and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().join(" ")
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Rejects empty or whitespace-only input before it reaches the driver.
pub fn ensure_not_empty(text: &str) -> Result<&str, Error> {
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(text)
}
