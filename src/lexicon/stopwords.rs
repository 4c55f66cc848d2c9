//! Built-in stopword tables and the combined `StopwordSet`.
//!
//! The combined set is `base language list ∪ domain noise ∪ configured extras`,
//! minus the negators and intensifiers the sentiment scorer depends on.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::config::Language;
use crate::lexicon::polarity::{INTENSIFIERS, NEGATORS};

/// Indonesian function words (Tala / Sastrawi style list, trimmed).
pub const INDONESIAN: &[&str] = &[
    "ada", "adalah", "adanya", "agak", "agar", "akan", "akhirnya", "aku", "akulah", "amat",
    "anda", "andalah", "antar", "antara", "apa", "apabila", "apakah", "apalagi", "atau",
    "ataupun", "bagai", "bagaimana", "bagi", "bahkan", "bahwa", "baru", "begitu", "beliau",
    "belum", "benar", "berapa", "bersama", "beberapa", "biasa", "biasanya", "bila", "bisa",
    "boleh", "cukup", "dalam", "dan", "dapat", "dari", "daripada", "dengan", "di", "dia",
    "dialah", "dini", "diri", "dong", "dulu", "guna", "hal", "hampir", "hanya", "harus",
    "hingga", "ia", "ialah", "ini", "inilah", "itu", "itulah", "jadi", "juga", "jika",
    "jikalau", "justru", "kalau", "kalian", "kami", "kamu", "kan", "kapan", "karena", "kata",
    "ke", "kemudian", "kenapa", "kepada", "ketika", "kini", "kita", "kok", "lagi", "lah",
    "lain", "lalu", "lebih", "masih", "mau", "maka", "makin", "masing", "melainkan",
    "memang", "mereka", "meski", "mungkin", "namun", "nanti", "nya", "oleh", "pada",
    "padahal", "para", "pernah", "pula", "pun", "saat", "saja", "saling", "sama", "sambil",
    "sampai", "sangat", "saya", "se", "sebab", "sebagai", "sebelum", "sebuah", "secara",
    "sedang", "sedangkan", "sehingga", "sejak", "sekali", "sekarang", "selalu", "selama",
    "semua", "sendiri", "seperti", "sering", "serta", "setelah", "setiap", "sih", "siapa",
    "suatu", "sudah", "supaya", "tadi", "tapi", "tentang", "tentu", "terhadap", "terus",
    "tetapi", "toh", "untuk", "walau", "walaupun", "ya", "yaitu", "yakni", "yang",
];

/// English function words (scikit-learn style list, trimmed).
pub const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
    "during", "each", "etc", "even", "ever", "every", "few", "for", "from", "further",
    "get", "got", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "however", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "much", "must", "my", "myself", "nor", "now",
    "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out",
    "over", "own", "same", "she", "should", "since", "so", "some", "still", "such", "than",
    "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "thus", "to", "too", "under", "until", "up", "upon",
    "us", "very", "was", "we", "were", "what", "when", "where", "whether", "which", "while",
    "who", "whom", "why", "will", "with", "would", "yet", "you", "your", "yours",
    "yourself", "yourselves",
];

/// App-store noise: brand names and generic store vocabulary.
pub const DOMAIN_NOISE: &[&str] = &[
    "aplikasi", "aplikasinya", "apk", "app", "apps", "application", "android", "ios",
    "iphone", "hp", "handphone", "google", "play", "playstore", "store", "appstore",
    "update", "updated", "updates", "version", "versi", "download", "downloaded", "unduh",
    "install", "instal", "uninstall", "admin", "min", "kak", "gan", "sis", "tolong",
    "mohon", "please", "pls", "dev", "developer", "bintang", "star", "stars", "rating",
    "review", "ulasan", "gojek", "grab", "shopee", "tokopedia", "whatsapp", "instagram",
    "facebook", "tiktok",
];

/// English list reused by the TF-IDF analyzer on top of language filtering.
pub static ENGLISH_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| ENGLISH.iter().copied().collect());

/// Read-only combined stopword set for one language.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Base list for `language` ∪ domain noise ∪ `extra`, minus negators and intensifiers.
    pub fn for_language(language: Language, extra: &[String]) -> Self {
        let base: &[&str] = match language {
            Language::Indonesian => INDONESIAN,
            Language::English => ENGLISH,
        };
        let mut words: HashSet<String> = base
            .iter()
            .chain(DOMAIN_NOISE.iter())
            .map(|w| w.to_string())
            .collect();
        for w in extra {
            let w = w.trim().to_lowercase();
            if !w.is_empty() {
                words.insert(w);
            }
        }
        for modifier in NEGATORS.iter().chain(INTENSIFIERS.iter().map(|(w, _)| w)) {
            words.remove(*modifier);
        }
        Self { words }
    }

    /// Build from an explicit list (tests, custom callers).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_set_keeps_sentiment_modifiers_out() {
        let set = StopwordSet::for_language(Language::Indonesian, &[]);
        assert!(set.contains("ini"));
        assert!(set.contains("dan"));
        assert!(set.contains("sering"));
        assert!(set.contains("update"));
        assert!(!set.contains("tidak"));
        assert!(!set.contains("lambat"));
        for w in ["sangat", "amat", "sekali"] {
            assert!(!set.contains(w), "{w} filtered");
        }

        let en = StopwordSet::for_language(Language::English, &[]);
        assert!(en.contains("the"));
        assert!(!en.contains("not"));
        assert!(!en.contains("very"));
    }

    #[test]
    fn extras_are_trimmed_and_lowercased() {
        let set = StopwordSet::for_language(
            Language::Indonesian,
            &[" Dana ".to_string(), String::new()],
        );
        assert!(set.contains("dana"));
        assert!(!set.contains(""));
    }
}
