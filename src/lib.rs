//! Resume screening: extract keyword, experience and education signals from
//! free-form text, combine them into a weighted 0-100 score and rank
//! candidates against a job profile.

pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod report;
pub mod scan;
pub mod types;

pub use engine::{rank, score};
pub use error::{Result, ScreenerError};
pub use types::document::Document;
pub use types::profile::JobProfile;
pub use types::scoring::{RankedEntry, RankedResult, ScoreBreakdown, WEIGHTS};
