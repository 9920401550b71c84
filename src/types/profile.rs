use crate::error::{Result, ScreenerError};
use serde::Serialize;

/// What a screening run is looking for: a keyword set and an experience bar.
///
/// Keywords are trimmed, lowercased and deduplicated in first-seen order.
/// Construction fails fast on inputs that would make scoring undefined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobProfile {
    keywords: Vec<String>,
    required_experience: u32,
}

impl JobProfile {
    pub fn new<I, S>(keywords: I, required_experience: i64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for (index, keyword) in keywords.into_iter().enumerate() {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if keyword.is_empty() {
                return Err(ScreenerError::BlankKeyword(index));
            }
            if !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }
        if normalized.is_empty() {
            return Err(ScreenerError::EmptyKeywords);
        }

        let required_experience = u32::try_from(required_experience)
            .ok()
            .filter(|years| *years > 0)
            .ok_or(ScreenerError::InvalidRequiredExperience(required_experience))?;

        Ok(Self {
            keywords: normalized,
            required_experience,
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn required_experience(&self) -> u32 {
        self.required_experience
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lowercases_trims_and_dedupes_keywords() {
        let profile = JobProfile::new(["Python", " SQL ", "python", "Machine Learning"], 3)
            .expect("profile should build");
        assert_eq!(profile.keywords(), ["python", "sql", "machine learning"]);
        assert_eq!(profile.required_experience(), 3);
    }

    #[test]
    fn new_rejects_empty_keyword_list() {
        let result = JobProfile::new(Vec::<String>::new(), 2);
        assert!(matches!(result, Err(ScreenerError::EmptyKeywords)));
    }

    #[test]
    fn new_rejects_blank_keyword_with_its_position() {
        let result = JobProfile::new(["rust", "  "], 2);
        assert!(matches!(result, Err(ScreenerError::BlankKeyword(1))));
    }

    #[test]
    fn new_rejects_non_positive_experience() {
        for years in [0, -4] {
            let result = JobProfile::new(["rust"], years);
            assert!(matches!(
                result,
                Err(ScreenerError::InvalidRequiredExperience(value)) if value == years
            ));
        }
    }

    #[test]
    fn new_rejects_experience_beyond_u32() {
        let result = JobProfile::new(["rust"], i64::from(u32::MAX) + 1);
        assert!(matches!(
            result,
            Err(ScreenerError::InvalidRequiredExperience(_))
        ));
    }
}
