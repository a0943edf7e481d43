//! Which words are worth a dictionary entry.

use tp_core::CodecConfig;

/// A word qualifies when it is not purely numeric, recurs at least
/// `min_occurrences` times and is at least `min_word_chars` chars long.
pub fn is_eligible(word: &str, occurrences: usize, config: &CodecConfig) -> bool {
    !word.chars().all(char::is_numeric)
        && occurrences >= config.min_occurrences
        && word.chars().count() >= config.min_word_chars
}

/// Header entries are separated by whitespace and bounded by the marker,
/// so a word containing either cannot be stored there.
pub fn fits_header(word: &str, marker: char) -> bool {
    !word.chars().any(|c| c == marker || c.is_whitespace())
}
