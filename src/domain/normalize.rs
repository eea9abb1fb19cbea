//! Word normalization: strip non-alphabetic characters and lowercase.

/// Keep only ASCII alphabetic characters of `raw`, lowercased, in their original order.
///
/// Everything else (digits, punctuation, symbols, non-ASCII letters) is deleted.
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
