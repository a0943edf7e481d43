//! Decoder: parse the header dictionary, then resolve the body.

use crate::dictionary::Dictionary;
use crate::tokenizer::{self, LINE_SEPARATOR, WORD_SEPARATOR};
use tp_core::DecodingError;

/// Per-document token counts gathered while decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    pub dictionary_len: usize,
    /// Index tokens resolved to a dictionary word.
    pub resolved: usize,
    /// Doubled markers collapsed back to one.
    pub unescaped: usize,
    /// Marker-prefixed tokens that were not a valid index, kept as literal text.
    pub fallbacks: usize,
}

pub fn decode(encoded: &str, marker: char) -> Result<String, DecodingError> {
    decode_with_stats(encoded, marker).map(|(decoded, _)| decoded)
}

pub fn decode_with_stats(
    encoded: &str,
    marker: char,
) -> Result<(String, DecodeStats), DecodingError> {
    // [before first marker, header, body]; markers inside the body stay in place.
    let mut segments = encoded.splitn(3, marker);
    segments.next();
    let header = segments
        .next()
        .ok_or(DecodingError::HeaderNotFound { marker })?;
    let body = segments.next().unwrap_or("");

    let dictionary = Dictionary::from_header(header);
    let mut stats = DecodeStats {
        dictionary_len: dictionary.len(),
        ..Default::default()
    };

    let mut output = String::with_capacity(body.len() * 2);
    for (i, line) in tokenizer::lines(body).enumerate() {
        if i != 0 {
            output.push(LINE_SEPARATOR);
        }
        for (j, word) in tokenizer::words(line).enumerate() {
            if j != 0 {
                output.push(WORD_SEPARATOR);
            }
            output.push_str(decode_word(word, &dictionary, marker, &mut stats));
        }
    }

    tracing::debug!(?stats, "document decoded");
    Ok((output, stats))
}

fn decode_word<'a>(
    word: &'a str,
    dictionary: &'a Dictionary,
    marker: char,
    stats: &mut DecodeStats,
) -> &'a str {
    let Some(rest) = word.strip_prefix(marker) else {
        return word;
    };
    if rest.is_empty() {
        return word;
    }

    match parse_index(rest).and_then(|index| dictionary.word(index)) {
        Some(resolved) => {
            stats.resolved += 1;
            resolved
        }
        None if rest.starts_with(marker) => {
            stats.unescaped += 1;
            rest
        }
        None => {
            tracing::debug!(token = word, "not a dictionary index, keeping literal text");
            stats.fallbacks += 1;
            rest
        }
    }
}

/// Only plain ASCII digits form an index; anything else is literal text.
fn parse_index(candidate: &str) -> Option<usize> {
    if candidate.is_empty() || !candidate.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    candidate.parse().ok()
}
