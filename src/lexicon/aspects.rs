//! Built-in aspect taxonomy for app reviews (English + Indonesian triggers).

pub const APP_ASPECTS: &[(&str, &[&str])] = &[
    (
        "ui",
        &[
            "ui", "interface", "design", "layout", "screen", "theme", "color", "dark mode",
            "light mode", "appearance", "look", "visual", "tampilan", "desain", "warna",
            "layar", "tema",
        ],
    ),
    (
        "performance",
        &[
            "performance", "speed", "fast", "slow", "lag", "crash", "hang", "freeze",
            "loading", "battery", "memory", "responsive", "lambat", "lemot", "lelet", "cepat",
            "macet", "berat", "baterai", "memori", "force close",
        ],
    ),
    (
        "usability",
        &[
            "usability", "user-friendly", "easy", "difficult", "simple", "complex",
            "intuitive", "confusing", "navigation", "accessible", "mudah", "susah", "sulit",
            "ribet", "gampang", "bingung", "praktis",
        ],
    ),
    (
        "features",
        &[
            "feature", "function", "functionality", "capability", "option", "setting", "tool",
            "ability", "control", "fitur", "fungsi", "pengaturan", "menu",
        ],
    ),
    (
        "reliability",
        &[
            "reliable", "stability", "stable", "consistent", "dependable", "error", "bug",
            "issue", "problem", "glitch", "fix", "eror", "masalah", "gangguan", "stabil",
            "perbaiki",
        ],
    ),
    (
        "updates",
        &[
            "update", "upgrade", "version", "release", "improvement", "enhancement", "change",
            "new", "latest", "pembaruan", "versi", "terbaru",
        ],
    ),
    (
        "content",
        &[
            "content", "post", "photo", "video", "story", "feed", "timeline", "quality",
            "relevance", "recommendation", "konten", "foto", "kualitas", "rekomendasi",
        ],
    ),
    (
        "privacy",
        &[
            "privacy", "security", "data", "permission", "tracking", "safe", "secure",
            "protection", "personal", "privasi", "keamanan", "aman", "izin", "pribadi",
        ],
    ),
    (
        "ads",
        &[
            "ad", "ads", "advertisement", "commercial", "promotion", "sponsored", "marketing",
            "popup", "iklan", "promosi",
        ],
    ),
];
