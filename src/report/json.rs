use crate::types::profile::JobProfile;
use crate::types::scoring::RankedEntry;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'r, 'a> {
    generated_at: DateTime<Utc>,
    profile: &'r JobProfile,
    ranking: &'r [RankedEntry<'a>],
}

pub fn to_json(entries: &[RankedEntry<'_>], profile: &JobProfile) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        generated_at: Utc::now(),
        profile,
        ranking: entries,
    })
}
