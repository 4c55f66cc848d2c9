//! Polarity/subjectivity lexicon for Indonesian and English review vocabulary.
//!
//! Entries are `(word, polarity, subjectivity)`; polarity in [-1,1], subjectivity in [0,1].

pub const WORDS: &[(&str, f64, f64)] = &[
    // --- Indonesian, positive ---
    ("bagus", 0.7, 0.8),
    ("baik", 0.6, 0.6),
    ("mantap", 0.8, 0.9),
    ("keren", 0.7, 0.9),
    ("hebat", 0.8, 0.9),
    ("suka", 0.5, 0.7),
    ("senang", 0.6, 0.8),
    ("puas", 0.7, 0.8),
    ("cepat", 0.4, 0.5),
    ("lancar", 0.5, 0.5),
    ("mudah", 0.4, 0.5),
    ("gampang", 0.4, 0.6),
    ("bantu", 0.4, 0.4),
    ("nyaman", 0.6, 0.7),
    ("aman", 0.5, 0.5),
    ("rekomendasi", 0.5, 0.6),
    ("recommended", 0.6, 0.6),
    ("terbaik", 0.9, 0.6),
    ("sempurna", 1.0, 1.0),
    ("memuaskan", 0.7, 0.8),
    ("praktis", 0.5, 0.5),
    ("stabil", 0.4, 0.4),
    ("mantul", 0.8, 0.9),
    ("oke", 0.3, 0.5),
    ("top", 0.6, 0.6),
    ("terima", 0.2, 0.3),
    ("kasih", 0.2, 0.3),
    // --- Indonesian, negative ---
    ("lambat", -0.5, 0.6),
    ("lemot", -0.6, 0.7),
    ("lelet", -0.6, 0.7),
    ("crash", -0.6, 0.7),
    ("error", -0.5, 0.6),
    ("eror", -0.5, 0.6),
    ("buruk", -0.7, 0.8),
    ("jelek", -0.7, 0.8),
    ("kecewa", -0.8, 0.9),
    ("susah", -0.5, 0.6),
    ("sulit", -0.4, 0.6),
    ("ribet", -0.5, 0.7),
    ("hang", -0.5, 0.6),
    ("macet", -0.5, 0.6),
    ("sampah", -0.8, 0.9),
    ("parah", -0.6, 0.8),
    ("gagal", -0.6, 0.6),
    ("bug", -0.4, 0.5),
    ("boros", -0.4, 0.6),
    ("mahal", -0.3, 0.6),
    ("ganggu", -0.5, 0.7),
    ("kesal", -0.7, 0.9),
    ("marah", -0.7, 0.9),
    ("bosan", -0.4, 0.8),
    ("rusak", -0.6, 0.6),
    ("hilang", -0.3, 0.4),
    ("tipu", -0.8, 0.8),
    ("penipuan", -0.9, 0.8),
    ("lag", -0.4, 0.6),
    ("lemah", -0.4, 0.5),
    // --- English, positive ---
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("awesome", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("love", 0.5, 0.6),
    ("nice", 0.6, 1.0),
    ("best", 1.0, 0.3),
    ("perfect", 1.0, 1.0),
    ("easy", 0.43, 0.83),
    ("fast", 0.2, 0.6),
    ("smooth", 0.4, 0.6),
    ("helpful", 0.5, 0.5),
    ("useful", 0.3, 0.0),
    ("happy", 0.8, 1.0),
    ("reliable", 0.5, 0.5),
    // --- English, negative ---
    ("bad", -0.7, 0.67),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("slow", -0.3, 0.39),
    ("buggy", -0.5, 0.6),
    ("useless", -0.5, 0.2),
    ("annoying", -0.8, 0.9),
    ("hate", -0.8, 0.9),
    ("broken", -0.4, 0.4),
    ("disappointed", -0.75, 0.75),
    ("laggy", -0.5, 0.6),
    ("crashes", -0.6, 0.7),
];

/// Multipliers applied to the next lexicon hit.
pub const INTENSIFIERS: &[(&str, f64)] = &[
    ("sangat", 1.3),
    ("banget", 1.3),
    ("bgt", 1.3),
    ("amat", 1.3),
    ("sekali", 1.2),
    ("terlalu", 1.2),
    ("paling", 1.4),
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("super", 1.4),
];

/// Intensifiers that follow the word they modify ("bagus banget").
pub const POSTPOSITIVE: &[&str] = &["sekali", "banget", "bgt"];

/// Tokens that flip (and dampen) the polarity of a following hit.
pub const NEGATORS: &[&str] = &[
    "tidak", "tak", "bukan", "belum", "jangan", "gak", "ga", "nggak", "enggak", "ngga",
    "kagak", "not", "no", "never", "dont", "cant", "cannot", "isnt", "wasnt", "doesnt",
    "wont",
];
