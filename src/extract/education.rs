/// Education terms in priority order with their scores.
pub const EDUCATION_LEVELS: [(&str, f64); 5] = [
    ("phd", 1.0),
    ("master", 0.8),
    ("bachelor", 0.6),
    ("associate", 0.4),
    ("diploma", 0.3),
];

pub const DEFAULT_EDUCATION_SCORE: f64 = 0.2;

/// First term of [`EDUCATION_LEVELS`] present in lowercase `text`.
pub fn education_level(text: &str) -> Option<(&'static str, f64)> {
    EDUCATION_LEVELS
        .iter()
        .copied()
        .find(|(term, _)| text.contains(term))
}

pub fn education_score(text: &str) -> f64 {
    education_level(text)
        .map(|(_, score)| score)
        .unwrap_or(DEFAULT_EDUCATION_SCORE)
}
