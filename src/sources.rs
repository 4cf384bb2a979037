use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

use crate::types::{ArticleResource, SearchOrder, VideoResource};

pub mod config;
pub mod feed;
pub mod medium;
pub mod youtube;

pub use config::{HttpConfig, MediumConfig, YoutubeConfig};
pub use medium::MediumSource;
pub use youtube::YoutubeSource;

/// Remote video search. Implementations degrade to an empty list on failure.
#[async_trait]
pub trait VideoSource: Send + Sync {
    fn name(&self) -> &str;
    async fn search(&self, query: &str, max_results: usize, order: SearchOrder) -> Vec<VideoResource>;
}

/// Remote tag feed. Implementations degrade to an empty list on failure.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch(&self, tag_slug: &str, max_results: usize) -> Vec<ArticleResource>;
}

/// Shared HTTP client for both sources.
pub fn build_client(cfg: &HttpConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(cfg.user_agent.clone());
    if cfg.timeout_ms > 0 {
        builder = builder.timeout(Duration::from_millis(cfg.timeout_ms));
    }
    builder.build().context("building HTTP client")
}
