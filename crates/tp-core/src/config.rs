use crate::error::{Result, TpError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reserved character delimiting the header and prefixing index tokens.
pub const DEFAULT_MARKER: char = '@';

/// Smallest word length (in chars) worth a dictionary entry.
pub const DEFAULT_MIN_WORD_CHARS: usize = 5;

/// Smallest number of occurrences worth a dictionary entry.
pub const DEFAULT_MIN_OCCURRENCES: usize = 2;

/// Codec settings. The defaults are the reference substitution policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub marker: char,
    pub min_word_chars: usize,
    pub min_occurrences: usize,
}

impl CodecConfig {
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Reject settings under which encoded output could not be decoded.
    pub fn validate(&self) -> Result<()> {
        if self.marker.is_whitespace() {
            return Err(TpError::InvalidConfig(format!(
                "marker {:?} is a whitespace character",
                self.marker
            )));
        }
        if self.marker.is_ascii_digit() {
            return Err(TpError::InvalidConfig(format!(
                "marker {:?} is a decimal digit",
                self.marker
            )));
        }
        if self.min_word_chars == 0 {
            return Err(TpError::InvalidConfig("min_word_chars must be at least 1".into()));
        }
        if self.min_occurrences == 0 {
            return Err(TpError::InvalidConfig("min_occurrences must be at least 1".into()));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), ?config, "loaded codec config");
        Ok(config)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            min_word_chars: DEFAULT_MIN_WORD_CHARS,
            min_occurrences: DEFAULT_MIN_OCCURRENCES,
        }
    }
}
