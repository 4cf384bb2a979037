pub mod assembler;
pub mod config;
pub mod mapping;
pub mod render;
pub mod sources;
pub mod types;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::assembler::PlanAssembler;
    pub use crate::config::Config;
    pub use crate::sources::{ArticleSource, VideoSource};
    pub use crate::types::{ArticleResource, LearningPlan, PlanRequest, SearchOrder, VideoResource, WeekPlan};
    pub use crate::LearnPath;
}

use anyhow::{anyhow, Result};
use std::sync::Arc;

use crate::assembler::PlanAssembler;
use crate::config::Config;
use crate::sources::{build_client, ArticleSource, MediumSource, VideoSource, YoutubeSource};
use crate::types::{LearningPlan, PlanRequest};

/// YouTube + Medium backed plan generator.
pub struct LearnPath {
    assembler: PlanAssembler,
}

impl LearnPath {
    /// Build both sources from `config`, sharing one HTTP client. Fails when no API key is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key()
            .ok_or_else(|| anyhow!("no YouTube API key configured (set {})", crate::config::API_KEY_ENV))?;
        let client = build_client(&config.http)?;
        let videos = YoutubeSource::new(client.clone(), api_key, &config.youtube)?;
        let articles = MediumSource::new(client, &config.medium)?;
        Ok(Self::with_sources(Arc::new(videos), Arc::new(articles)))
    }

    pub fn with_sources(videos: Arc<dyn VideoSource>, articles: Arc<dyn ArticleSource>) -> Self {
        Self { assembler: PlanAssembler::new(videos, articles) }
    }

    pub async fn generate(&self, request: &PlanRequest) -> LearningPlan {
        self.assembler.assemble(request).await
    }

    /// Request seeded from the configured defaults.
    pub fn default_request(config: &Config, skill: impl Into<String>) -> PlanRequest {
        PlanRequest {
            skill: skill.into(),
            weeks: config.plan.weeks,
            videos_per_week: config.plan.videos_per_week,
            articles_per_week: config.plan.articles_per_week,
            order: config.plan.order,
        }
    }
}
