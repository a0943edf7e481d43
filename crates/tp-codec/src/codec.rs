//! `Codec` — configured entry point bundling encode, decode and statistics.

use crate::decoder::{self, DecodeStats};
use crate::dictionary::Dictionary;
use crate::encoder;
use tp_core::{CodecConfig, DecodingError, Result};

/// Encode result with size statistics.
#[derive(Debug, Clone)]
pub struct EncodeReport {
    pub output: String,
    pub dictionary: Dictionary,
    pub original_len: usize,
    pub encoded_len: usize,
}

impl EncodeReport {
    /// Encoded size over original size, in bytes.
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.encoded_len as f64 / self.original_len as f64
    }

    /// Fraction of bytes saved; negative when the header outweighs the savings.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_len == 0 { return 0.0; }
        1.0 - self.ratio()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn marker(&self) -> char {
        self.config.marker
    }

    /// Whether `text` looks like encoder output (starts with the marker).
    pub fn is_encoded(&self, text: &str) -> bool {
        text.starts_with(self.config.marker)
    }

    pub fn encode(&self, document: &str) -> String {
        encoder::encode(document, &self.config)
    }

    pub fn encode_with_dictionary(&self, document: &str) -> (String, Dictionary) {
        encoder::encode_with_dictionary(document, &self.config)
    }

    pub fn encode_with_report(&self, document: &str) -> EncodeReport {
        let (output, dictionary) = self.encode_with_dictionary(document);
        EncodeReport {
            original_len: document.len(),
            encoded_len: output.len(),
            output,
            dictionary,
        }
    }

    pub fn decode(&self, encoded: &str) -> std::result::Result<String, DecodingError> {
        decoder::decode(encoded, self.config.marker)
    }

    pub fn decode_with_stats(
        &self,
        encoded: &str,
    ) -> std::result::Result<(String, DecodeStats), DecodingError> {
        decoder::decode_with_stats(encoded, self.config.marker)
    }
}
