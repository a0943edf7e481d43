//! tokpack codec — reversible word-dictionary substitution for text.
//!
//! Stages:
//! 1. Tokenizer — split into `\n` lines and `' '` words, count occurrences
//! 2. Policy — decide which words earn a dictionary entry
//! 3. Encoder — emit `@dictionary@body` with `@<index>` tokens
//! 4. Decoder — resolve index tokens and unescape literal markers

pub mod codec;
pub mod decoder;
pub mod dictionary;
pub mod encoder;
pub mod policy;
pub mod tokenizer;

pub use codec::{Codec, EncodeReport};
pub use decoder::DecodeStats;
pub use dictionary::Dictionary;
pub use tokenizer::FrequencyTable;
pub use tp_core::{CodecConfig, DecodingError, DEFAULT_MARKER};

/// Encode a document with the default policy and marker.
pub fn encode(document: &str) -> String {
    encoder::encode(document, &CodecConfig::default())
}

/// Decode a document produced by [`encode`].
pub fn decode(encoded: &str) -> Result<String, DecodingError> {
    decoder::decode(encoded, DEFAULT_MARKER)
}
