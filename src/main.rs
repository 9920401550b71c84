mod cli;

use clap::Parser;
use screener::config;
use screener::error::ScreenerError;
use screener::report::{self, OutputFormat};
use screener::types::config::ScreenerConfig;
use screener::{engine, scan, Document};
use std::io::IsTerminal;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const INVALID_PROFILE: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn load_config(path: &Path, explicit: Option<&Path>) -> Result<ScreenerConfig, ScreenerError> {
    match config::load_config(path, explicit)? {
        Some(cfg) => Ok(cfg),
        None => {
            info!(path = %path.display(), "no screener.toml found, using command line only");
            Ok(ScreenerConfig::default())
        }
    }
}

fn run(cli: cli::Cli) -> Result<i32, ScreenerError> {
    match cli.command {
        cli::Commands::Rank(cmd) => {
            if !cmd.path.exists() {
                return Err(ScreenerError::PathNotFound(cmd.path.display().to_string()));
            }

            let cfg = load_config(&cmd.path, cmd.profile.config.as_deref())?;
            let profile = cfg.job_profile(&cmd.profile.keywords, cmd.profile.experience)?;
            let documents = scan::load_documents(&cmd.path, &cfg.extensions())?;

            let ranked = engine::rank(&documents, &profile);
            info!(
                documents = ranked.len(),
                keywords = profile.keywords().len(),
                required_experience = profile.required_experience(),
                "ranked documents"
            );

            let format = match cmd.format {
                Some(cli::ReportFormat::Text) => OutputFormat::Text,
                Some(cli::ReportFormat::Json) => OutputFormat::Json,
                Some(cli::ReportFormat::Md) => OutputFormat::Md,
                None => cfg.report_format().unwrap_or(OutputFormat::Text),
            };
            let top = cmd
                .top
                .map(|top| usize::try_from(top).unwrap_or(usize::MAX))
                .or(cfg.top());
            let rendered = report::render(&ranked, &profile, format, top)?;
            print!("{rendered}");

            if documents.is_empty() {
                warn!(path = %cmd.path.display(), "no documents found");
                return Ok(exit_code::WARNINGS);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            if !cmd.file.is_file() {
                return Err(ScreenerError::PathNotFound(cmd.file.display().to_string()));
            }

            let cfg = load_config(&cmd.file, cmd.profile.config.as_deref())?;
            let profile = cfg.job_profile(&cmd.profile.keywords, cmd.profile.experience)?;
            let content = std::fs::read_to_string(&cmd.file)?;
            let name = cmd
                .file
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| cmd.file.display().to_string());
            let document = Document::new(name, &content);

            let breakdown = engine::score(&document, &profile);
            println!("{}: {:.2}", document.name(), breakdown.composite);
            println!(
                "  keywords:   {:.2}% ({} hits)",
                breakdown.keyword_score, breakdown.keyword_hits
            );
            println!(
                "  experience: {:.2}% ({} years)",
                breakdown.experience_score, breakdown.years
            );
            match screener::extract::education_level(document.text()) {
                Some((term, _)) => {
                    println!("  education:  {:.2}% ({term})", breakdown.education_score)
                }
                None => println!("  education:  {:.2}%", breakdown.education_score),
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            if !cmd.path.exists() {
                return Err(ScreenerError::PathNotFound(cmd.path.display().to_string()));
            }

            let loaded = config::load_config(&cmd.path, cmd.config.as_deref())?;
            let Some(cfg) = loaded else {
                eprintln!("warning: no screener.toml found for {}", cmd.path.display());
                return Ok(exit_code::WARNINGS);
            };
            let profile = cfg.job_profile(&[], None)?;
            println!("config ok");
            println!("keywords: {}", profile.keywords().join(", "));
            println!("required experience: {} years", profile.required_experience());
            println!("extensions: {}", cfg.extensions().join(", "));
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != exit_code::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_profile_error() {
                exit_code::INVALID_PROFILE
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
