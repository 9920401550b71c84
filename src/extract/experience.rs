use regex::Regex;
use std::sync::OnceLock;

// Tried in order; the first pattern with a match anywhere in the text wins.
const PATTERNS: [&str; 3] = [
    r"([0-9]+)\s*(?:years?|yrs?)\s*(?:of\s*)?experience",
    r"(?s)experience.*?([0-9]+)\s*(?:years?|yrs?)",
    r"(?s)worked.*?([0-9]+)\s*(?:years?|yrs?)",
];

fn experience_patterns() -> &'static [Regex] {
    static RE: OnceLock<Vec<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("experience pattern should compile"))
            .collect()
    })
}

/// Years of experience claimed in lowercase `text`, or 0 when no phrase matches.
///
/// The two trailing patterns allow any gap between the trigger word and the
/// number, so they can pick up an unrelated figure later in the text.
pub fn extract_years(text: &str) -> u32 {
    experience_patterns()
        .iter()
        .find_map(|pattern| pattern.captures(text))
        .and_then(|captures| captures.get(1))
        // digits only, so a parse failure means overflow
        .map(|digits| digits.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// Saturating ratio of extracted to required years, in [0, 1].
pub fn experience_score(years: u32, required: u32) -> f64 {
    if required == 0 {
        return 0.0;
    }
    (f64::from(years) / f64::from(required)).min(1.0)
}
