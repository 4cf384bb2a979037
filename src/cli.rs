use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use learnpath::config::Config;
use learnpath::types::{PlanRequest, SearchOrder};
use learnpath::LearnPath;

/// Largest page the video search endpoint will return.
pub const MAX_VIDEO_RESULTS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Generate a personalised multi-week learning path using YouTube and Medium resources
#[derive(Debug, Parser)]
#[command(name = "learnpath", version)]
#[command(about = "Generate a multi-week learning path from YouTube videos and Medium articles", long_about = None)]
pub struct Cli {
    /// Skill or topic to learn (e.g. 'React', 'Cryptography')
    #[arg(long)]
    pub skill: String,

    /// YouTube Data API key. You can also set the YOUTUBE_API_KEY environment variable
    #[arg(long)]
    pub youtube_api_key: Option<String>,

    /// Number of weeks in the learning plan [default: 4]
    #[arg(long)]
    pub weeks: Option<usize>,

    /// Number of videos to recommend each week [default: 2]
    #[arg(long)]
    pub videos_per_week: Option<usize>,

    /// Number of Medium articles to recommend each week [default: 2]
    #[arg(long)]
    pub articles_per_week: Option<usize>,

    /// Ordering for YouTube search results [default: relevance]
    #[arg(long, value_enum)]
    pub search_order: Option<SearchOrder>,

    /// Disable tabular formatting
    #[arg(long)]
    pub no_table: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Fold flags over `config` (flags win) and build the plan request.
    pub fn resolve(&self, config: &mut Config) -> PlanRequest {
        if let Some(key) = self.youtube_api_key.as_ref().filter(|k| !k.trim().is_empty()) {
            config.youtube.api_key = Some(key.clone());
        }
        let mut req = LearnPath::default_request(config, self.skill.clone());
        if let Some(w) = self.weeks { req.weeks = w; }
        if let Some(v) = self.videos_per_week { req.videos_per_week = v; }
        if let Some(a) = self.articles_per_week { req.articles_per_week = a; }
        if let Some(o) = self.search_order { req.order = o; }
        req
    }
}

/// Usage problems the core does not check for itself.
pub fn validate(config: &Config, req: &PlanRequest) -> Result<(), (ErrorKind, String)> {
    if config.api_key().is_none() {
        return Err((
            ErrorKind::MissingRequiredArgument,
            "You must provide a YouTube API key via --youtube-api-key or set the YOUTUBE_API_KEY environment variable."
                .to_string(),
        ));
    }
    if req.skill.trim().is_empty() {
        return Err((ErrorKind::InvalidValue, "--skill must not be empty".to_string()));
    }
    match req.total_videos() {
        Some(total) if total <= MAX_VIDEO_RESULTS => {}
        Some(total) => {
            return Err((
                ErrorKind::ValueValidation,
                format!(
                    "--weeks x --videos-per-week is {} but the video search returns at most {} results",
                    total, MAX_VIDEO_RESULTS
                ),
            ));
        }
        None => {
            return Err((
                ErrorKind::ValueValidation,
                format!("--weeks x --videos-per-week overflows; the video search returns at most {MAX_VIDEO_RESULTS} results"),
            ));
        }
    }
    if req.total_articles().is_none() {
        return Err((ErrorKind::ValueValidation, "--weeks x --articles-per-week overflows".to_string()));
    }
    Ok(())
}
