//! Line/word splitting and the per-document frequency table.

use std::collections::HashMap;

pub const LINE_SEPARATOR: char = '\n';
pub const WORD_SEPARATOR: char = ' ';

/// Split a document into lines. Keeps blank lines and a trailing empty line.
pub fn lines(document: &str) -> std::str::Split<'_, char> {
    document.split(LINE_SEPARATOR)
}

/// Split a line into words. Consecutive separators yield empty words.
pub fn words(line: &str) -> std::str::Split<'_, char> {
    line.split(WORD_SEPARATOR)
}

/// Occurrence count of every distinct word, remembering first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable<'a> {
    order: Vec<&'a str>,
    counts: HashMap<&'a str, usize>,
}

impl<'a> FrequencyTable<'a> {
    pub fn from_document(document: &'a str) -> Self {
        let mut table = Self::default();
        if document.is_empty() {
            return table;
        }
        for line in lines(document) {
            for word in words(line) {
                table.record(word);
            }
        }
        table
    }

    fn record(&mut self, word: &'a str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word, 1);
                self.order.push(word);
            }
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Distinct words with their counts, in order of first occurrence.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.order.iter().map(move |word| (*word, self.counts[*word]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
