pub mod education;
pub mod experience;
pub mod keywords;

pub use education::{education_level, education_score};
pub use experience::{experience_score, extract_years};
pub use keywords::{count_keywords, keyword_score};
