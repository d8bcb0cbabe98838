use crate::deck::CardFace;

/// Upper bound on deck size; sizes the matched-card index set.
pub const MAX_CARDS: usize = 24;

/// Face catalog. Hard mode uses all twelve entries, so every difficulty gets
/// distinct pair ids.
pub const CATALOG: [CardFace; 12] = [
    CardFace::new(1, "🎮"),
    CardFace::new(2, "🎧"),
    CardFace::new(3, "📚"),
    CardFace::new(4, "💻"),
    CardFace::new(5, "🎨"),
    CardFace::new(6, "⚡"),
    CardFace::new(7, "🎲"),
    CardFace::new(8, "🎯"),
    CardFace::new(9, "🚀"),
    CardFace::new(10, "🌙"),
    CardFace::new(11, "🔔"),
    CardFace::new(12, "🍀"),
];

/// Delay before a mismatched pair turns face down again.
pub const MISMATCH_DELAY_MS: u64 = 1000;

/// Lifetime of the feedback form's transient success notice.
pub const NOTICE_DELAY_MS: u64 = 3000;

/// Rating averages strictly below this are the low tier.
pub const RATING_LOW_CEIL: f64 = 4.0;
/// Rating averages strictly below this (and at least the low ceiling) are the
/// mid tier; everything above is the high tier.
pub const RATING_MID_CEIL: f64 = 7.0;
/// Each rating input ranges 0..=RATING_MAX.
pub const RATING_MAX: u8 = 10;

/// Helper tag prefix and suffix shape for form submissions.
pub const TAG_PREFIX: &str = "FE24-JS-CF-";
pub const TAG_SUFFIX_LEN: usize = 5;
pub const TAG_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
