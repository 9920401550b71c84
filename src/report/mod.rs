pub mod json;
pub mod md;
pub mod text;

use crate::error::ScreenerError;
use crate::types::profile::JobProfile;
use crate::types::scoring::{RankedEntry, RankedResult};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

pub fn render(
    ranked: &RankedResult<'_>,
    profile: &JobProfile,
    format: OutputFormat,
    top: Option<usize>,
) -> Result<String, ScreenerError> {
    let entries = visible(ranked, top);
    match format {
        OutputFormat::Text => Ok(text::to_text(entries)),
        OutputFormat::Json => json::to_json(entries, profile).map_err(ScreenerError::Json),
        OutputFormat::Md => Ok(md::to_markdown(entries, profile)),
    }
}

fn visible<'r, 'a>(ranked: &'r RankedResult<'a>, top: Option<usize>) -> &'r [RankedEntry<'a>] {
    let entries = ranked.entries();
    match top {
        Some(limit) => &entries[..limit.min(entries.len())],
        None => entries,
    }
}
