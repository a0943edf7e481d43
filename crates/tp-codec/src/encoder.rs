//! Encoder: `marker + dictionary + marker + rewritten body`.

use crate::dictionary::Dictionary;
use crate::tokenizer::{self, FrequencyTable, LINE_SEPARATOR, WORD_SEPARATOR};
use tp_core::CodecConfig;

pub fn encode(document: &str, config: &CodecConfig) -> String {
    encode_with_dictionary(document, config).0
}

/// Encode and hand back the dictionary embedded in the header.
pub fn encode_with_dictionary(document: &str, config: &CodecConfig) -> (String, Dictionary) {
    let table = FrequencyTable::from_document(document);
    let dictionary = Dictionary::from_table(&table, config);
    tracing::debug!(
        distinct_words = table.len(),
        entries = dictionary.len(),
        "dictionary built"
    );

    let marker = config.marker;
    let mut output = String::with_capacity(document.len() + 2);
    output.push(marker);
    output.push_str(&dictionary.to_header());
    output.push(marker);

    for (i, line) in tokenizer::lines(document).enumerate() {
        if i != 0 {
            output.push(LINE_SEPARATOR);
        }
        for (j, word) in tokenizer::words(line).enumerate() {
            if j != 0 {
                output.push(WORD_SEPARATOR);
            }
            encode_word(&mut output, word, &dictionary, marker);
        }
    }

    (output, dictionary)
}

fn encode_word(output: &mut String, word: &str, dictionary: &Dictionary, marker: char) {
    match dictionary.index_of(word) {
        Some(index) => {
            output.push(marker);
            output.push_str(&index.to_string());
        }
        None => {
            // Double a leading marker so it cannot be read back as an index token.
            if word.starts_with(marker) {
                output.push(marker);
            }
            output.push_str(word);
        }
    }
}
