//! Word tokenizer (UAX #29 word boundaries).

use unicode_segmentation::UnicodeSegmentation;

/// Split normalized text into word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(str::to_string).collect()
}
