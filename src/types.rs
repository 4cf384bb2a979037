use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A video returned by the video source, with a human-readable duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResource {
    pub title: String,
    pub channel: String,
    pub video_id: String,
    pub url: String,
    pub published_at: String,
    /// `M:SS`, or empty when the source had no duration for this id.
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleResource {
    pub title: String,
    pub url: String,
    pub published: String,
    pub summary: String,
}

/// One week of the plan. `videos` and `articles` may repeat items when the
/// sources returned fewer results than the plan asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub week: usize,
    pub theme: String,
    pub videos: Vec<VideoResource>,
    pub articles: Vec<ArticleResource>,
    pub activities: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPlan {
    pub skill: String,
    pub weeks: Vec<WeekPlan>,
}

impl LearningPlan {
    pub fn total_videos(&self) -> usize {
        self.weeks.iter().map(|w| w.videos.len()).sum()
    }

    pub fn total_articles(&self) -> usize {
        self.weeks.iter().map(|w| w.articles.len()).sum()
    }
}

/// Sort order accepted by the video search endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SearchOrder {
    Date,
    Rating,
    #[default]
    Relevance,
    Title,
    #[value(name = "viewCount", alias = "view-count")]
    ViewCount,
}

impl SearchOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOrder::Date => "date",
            SearchOrder::Rating => "rating",
            SearchOrder::Relevance => "relevance",
            SearchOrder::Title => "title",
            SearchOrder::ViewCount => "viewCount",
        }
    }
}

impl fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim() {
            "date" => Ok(SearchOrder::Date),
            "rating" => Ok(SearchOrder::Rating),
            "relevance" => Ok(SearchOrder::Relevance),
            "title" => Ok(SearchOrder::Title),
            "viewCount" | "view-count" => Ok(SearchOrder::ViewCount),
            other => Err(anyhow::anyhow!(
                "unknown search order '{other}' (expected date, rating, relevance, title or viewCount)"
            )),
        }
    }
}

/// Inputs to a single plan assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub skill: String,
    pub weeks: usize,
    pub videos_per_week: usize,
    pub articles_per_week: usize,
    pub order: SearchOrder,
}

impl PlanRequest {
    pub fn new(skill: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            weeks: 4,
            videos_per_week: 2,
            articles_per_week: 2,
            order: SearchOrder::default(),
        }
    }

    /// `weeks * videos_per_week`, or `None` when the product overflows.
    pub fn total_videos(&self) -> Option<usize> {
        self.weeks.checked_mul(self.videos_per_week)
    }

    pub fn total_articles(&self) -> Option<usize> {
        self.weeks.checked_mul(self.articles_per_week)
    }
}
