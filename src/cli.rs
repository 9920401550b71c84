use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "screener",
    version,
    about = "Rank resumes against a job profile by keywords, experience and education"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Rank(RankCommand),
    Score(ScoreCommand),
    Check(CheckCommand),
}

#[derive(Args)]
pub struct ProfileArgs {
    /// Keyword to screen for; repeat for more. Replaces [profile].keywords
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Required years of experience. Replaces [profile].required_experience
    #[arg(short, long, value_name = "YEARS", allow_negative_numbers = true)]
    pub experience: Option<i64>,

    /// Config file used instead of <path>/screener.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Rank every resume in a directory (or a single file)
#[derive(Args)]
pub struct RankCommand {
    pub path: PathBuf,
    #[command(flatten)]
    pub profile: ProfileArgs,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Only print the best N entries
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub top: Option<u64>,
}

/// Score a single resume and print its breakdown
#[derive(Args)]
pub struct ScoreCommand {
    pub file: PathBuf,
    #[command(flatten)]
    pub profile: ProfileArgs,
}

/// Validate the layered configuration and print the resolved profile
#[derive(Args)]
pub struct CheckCommand {
    pub path: PathBuf,
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}
