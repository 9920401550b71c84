use super::document::Document;
use serde::Serialize;

pub type Score = f64;

/// Fixed weighting policy for the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    pub keyword: Score,
    pub experience: Score,
    pub education: Score,
}

pub const WEIGHTS: Weights = Weights {
    keyword: 0.5,
    experience: 0.3,
    education: 0.2,
};

impl Weights {
    pub fn sum(&self) -> Score {
        self.keyword + self.experience + self.education
    }
}

/// Normalized signals for one document, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    pub keyword: Score,
    pub experience: Score,
    pub education: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub composite: Score,
    pub keyword_score: Score,
    pub keyword_hits: usize,
    pub years: u32,
    pub experience_score: Score,
    pub education_score: Score,
}

impl ScoreBreakdown {
    pub fn new(signals: Signals, keyword_hits: usize, years: u32, weights: &Weights) -> Self {
        let composite = (signals.keyword * weights.keyword
            + signals.experience * weights.experience
            + signals.education * weights.education)
            * 100.0;

        Self {
            composite: round2(composite),
            keyword_score: round2(signals.keyword * 100.0),
            keyword_hits,
            years,
            experience_score: round2(signals.experience * 100.0),
            education_score: round2(signals.education * 100.0),
        }
    }
}

fn round2(value: Score) -> Score {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    pub document: &'a Document,
    pub breakdown: ScoreBreakdown,
}

impl RankedEntry<'_> {
    pub fn name(&self) -> &str {
        self.document.name()
    }

    pub fn composite(&self) -> Score {
        self.breakdown.composite
    }
}

/// Documents ordered by descending composite score; ties keep input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedResult<'a> {
    entries: Vec<RankedEntry<'a>>,
}

impl<'a> RankedResult<'a> {
    /// Stable-sorts the scored pairs and assigns 1-based ranks.
    pub fn from_scored(mut scored: Vec<(&'a Document, ScoreBreakdown)>) -> Self {
        scored.sort_by(|a, b| b.1.composite.total_cmp(&a.1.composite));
        let entries = scored
            .into_iter()
            .enumerate()
            .map(|(index, (document, breakdown))| RankedEntry {
                rank: index + 1,
                document,
                breakdown,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedEntry<'a>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry<'a>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'r, 'a> IntoIterator for &'r RankedResult<'a> {
    type Item = &'r RankedEntry<'a>;
    type IntoIter = std::slice::Iter<'r, RankedEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
