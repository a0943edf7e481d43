//! Ordered word <-> index table carried in the encoded header.

use crate::policy;
use crate::tokenizer::{FrequencyTable, WORD_SEPARATOR};
use std::collections::HashMap;
use tp_core::CodecConfig;

/// Dense `0..N` index over the dictionary words, in assignment order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
    index: HashMap<String, usize>,
}

impl Dictionary {
    /// Admit every eligible, header-safe word in first-occurrence order.
    pub fn from_table(table: &FrequencyTable<'_>, config: &CodecConfig) -> Self {
        Self::from_words(
            table
                .iter()
                .filter(|(word, count)| policy::is_eligible(word, *count, config))
                .filter(|(word, _)| policy::fits_header(word, config.marker))
                .map(|(word, _)| word),
        )
    }

    /// Rebuild from the header segment of an encoded document.
    pub fn from_header(header: &str) -> Self {
        Self::from_words(header.split_whitespace())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dictionary = Self::default();
        for word in words {
            let word = word.into();
            dictionary.index.entry(word.clone()).or_insert(dictionary.words.len());
            dictionary.words.push(word);
        }
        dictionary
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words joined by single spaces, index implied by position.
    pub fn to_header(&self) -> String {
        let mut sep = [0u8; 4];
        self.words.join(WORD_SEPARATOR.encode_utf8(&mut sep))
    }
}
