use serde::{Deserialize, Serialize};

pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_FEED_URL_TEMPLATE: &str = "https://medium.com/feed/tag/{tag}";
pub const TAG_PLACEHOLDER: &str = "{tag}";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct YoutubeConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self { api_key: None, base_url: DEFAULT_YOUTUBE_BASE_URL.to_string() }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MediumConfig {
    /// Feed address with a `{tag}` placeholder for the tag slug.
    pub feed_url_template: String,
}

impl Default for MediumConfig {
    fn default() -> Self {
        Self { feed_url_template: DEFAULT_FEED_URL_TEMPLATE.to_string() }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 15_000,
            user_agent: concat!("learnpath/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
