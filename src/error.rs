use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("job profile needs at least one keyword")]
    EmptyKeywords,

    #[error("job profile keyword #{0} is blank")]
    BlankKeyword(usize),

    #[error("required_experience must be a positive number of years (got {0})")]
    InvalidRequiredExperience(i64),

    #[error("missing job profile input: {0}")]
    MissingProfile(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScreenerError {
    /// True for errors raised while building a job profile from its inputs.
    pub fn is_profile_error(&self) -> bool {
        matches!(
            self,
            ScreenerError::EmptyKeywords
                | ScreenerError::BlankKeyword(_)
                | ScreenerError::InvalidRequiredExperience(_)
                | ScreenerError::MissingProfile(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScreenerError>;
