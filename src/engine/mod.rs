use crate::extract;
use crate::types::document::Document;
use crate::types::profile::JobProfile;
use crate::types::scoring::{RankedResult, ScoreBreakdown, Signals, WEIGHTS};
use tracing::debug;

/// Scores one document against `profile`. Pure: the same inputs always
/// produce the same breakdown.
pub fn score(document: &Document, profile: &JobProfile) -> ScoreBreakdown {
    let text = document.text();

    let keyword_hits = extract::count_keywords(text, profile.keywords());
    let years = extract::extract_years(text);

    let signals = Signals {
        keyword: extract::keyword_score(keyword_hits, profile.keywords().len()),
        experience: extract::experience_score(years, profile.required_experience()),
        education: extract::education_score(text),
    };
    let breakdown = ScoreBreakdown::new(signals, keyword_hits, years, &WEIGHTS);

    debug!(
        document = document.name(),
        composite = breakdown.composite,
        keyword_hits,
        years,
        "scored document"
    );
    breakdown
}

/// Scores every document and orders them by descending composite score.
/// Equal scores keep their input order.
pub fn rank<'a>(documents: &'a [Document], profile: &JobProfile) -> RankedResult<'a> {
    let scored = documents
        .iter()
        .map(|document| (document, score(document, profile)))
        .collect();
    RankedResult::from_scored(scored)
}
