//! Document normalization.

/// Lowercases a document and removes every ASCII punctuation character.
///
/// Whitespace and non-ASCII characters other than case changes pass through untouched.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}
