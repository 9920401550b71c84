use crate::error::{Result, ScreenerError};
use crate::report::OutputFormat;
use crate::types::profile::JobProfile;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScreenerConfig {
    pub profile: Option<ProfileConfig>,
    pub documents: Option<DocumentsConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    #[serde(default)]
    pub keywords: Vec<String>,
    pub required_experience: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentsConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string(), "md".to_string()]
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub format: Option<OutputFormat>,
    pub top: Option<usize>,
}

impl ScreenerConfig {
    pub fn extensions(&self) -> Vec<String> {
        self.documents
            .as_ref()
            .map(|documents| documents.extensions.clone())
            .unwrap_or_else(default_extensions)
    }

    pub fn report_format(&self) -> Option<OutputFormat> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn top(&self) -> Option<usize> {
        self.report.as_ref().and_then(|report| report.top)
    }

    /// Builds the job profile, letting non-empty `keywords` and a present
    /// `required_experience` from the command line win over file values.
    pub fn job_profile(
        &self,
        keywords: &[String],
        required_experience: Option<i64>,
    ) -> Result<JobProfile> {
        let file_profile = self.profile.clone().unwrap_or_default();
        let keywords = if keywords.is_empty() {
            file_profile.keywords
        } else {
            keywords.to_vec()
        };
        if keywords.is_empty() {
            return Err(ScreenerError::MissingProfile(
                "no keywords given (use --keyword or [profile].keywords)".to_string(),
            ));
        }
        let required_experience = required_experience
            .or(file_profile.required_experience)
            .ok_or_else(|| {
                ScreenerError::MissingProfile(
                    "no experience requirement given (use --experience or [profile].required_experience)"
                        .to_string(),
                )
            })?;

        JobProfile::new(keywords, required_experience)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(documents) = &self.documents {
            if documents.extensions.is_empty() {
                return Err(ScreenerError::ConfigParse(
                    "documents.extensions cannot be empty".to_string(),
                ));
            }
            let mut seen = HashSet::new();
            for extension in &documents.extensions {
                let normalized = extension.trim().trim_start_matches('.').to_lowercase();
                if normalized.is_empty() {
                    return Err(ScreenerError::ConfigParse(
                        "documents.extensions entries must be non-empty".to_string(),
                    ));
                }
                if !seen.insert(normalized.clone()) {
                    return Err(ScreenerError::ConfigParse(format!(
                        "documents.extensions contains duplicate extension: {normalized}"
                    )));
                }
            }
        }

        if let Some(top) = self.top() {
            if top == 0 {
                return Err(ScreenerError::ConfigParse(
                    "report.top must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}
