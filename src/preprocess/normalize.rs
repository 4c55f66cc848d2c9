//! Text normalizer: entity decode, lowercase, strip URLs/punctuation/digits, fold whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://|www\.)\S+").expect("url regex"));
// `\w` keeps the underscore, which counts as punctuation here.
static RE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]|_").expect("punct regex"));
static RE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit regex"));
static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Normalize review text. Total: any input yields a (possibly empty) string.
pub fn normalize(text: &str) -> String {
    let decoded = html_escape::decode_html_entities(text);
    let lower = decoded.to_lowercase();
    // URLs become a space so neighbouring words stay apart.
    let out = RE_URL.replace_all(&lower, " ");
    let out = RE_PUNCT.replace_all(&out, "");
    let out = RE_DIGITS.replace_all(&out, "");
    collapse_whitespace(&out)
}

pub fn collapse_whitespace(s: &str) -> String {
    RE_WS.replace_all(s, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_ok() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn strips_urls_punctuation_and_digits() {
        let s = "Cek https://example.com/x?y=1 dan www.foo.id ya!! Versi 2.3.1 BAGUS, mantap.";
        assert_eq!(normalize(s), "cek dan ya versi bagus mantap");
    }

    #[test]
    fn decodes_entities_and_joins_contractions() {
        assert_eq!(normalize("Don&#39;t buy &amp; forget"), "dont buy forget");
        assert_eq!(normalize("snake_case"), "snakecase");
    }

    #[test]
    fn idempotent() {
        let once = normalize("Aplikasi   INI, sangat\tlambat!!! 100% crash :( http://x.y");
        assert_eq!(normalize(&once), once);
    }
}
