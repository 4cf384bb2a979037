use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use url::Url;

use crate::mapping::video_from_parts;
use crate::sources::{VideoSource, YoutubeConfig};
use crate::types::{SearchOrder, VideoResource};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchResponse {
    items: Vec<SearchItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Snippet {
    title: String,
    channel_title: String,
    published_at: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VideosResponse {
    items: Vec<VideoItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct VideoItem {
    id: String,
    content_details: ContentDetails,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentDetails {
    duration: String,
}

/// YouTube Data API v3 search plus a batched duration lookup.
pub struct YoutubeSource {
    client: reqwest::Client,
    api_key: String,
    base_url: Url,
}

impl YoutubeSource {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>, cfg: &YoutubeConfig) -> Result<Self> {
        let mut base = cfg.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).with_context(|| format!("invalid YouTube base URL: {}", cfg.base_url))?;
        Ok(Self { client, api_key: api_key.into(), base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).with_context(|| format!("joining '{path}' onto {}", self.base_url))
    }

    async fn search_items(&self, query: &str, max_results: usize, order: SearchOrder) -> Result<Vec<SearchItem>> {
        let url = self.endpoint("search")?;
        let max = max_results.to_string();
        tracing::debug!("video search q='{}' maxResults={} order={}", query, max, order);
        let resp: SearchResponse = self
            .client
            .get(url)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("q", query),
                ("maxResults", max.as_str()),
                ("order", order.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("sending search request")?
            .error_for_status()
            .context("search request rejected")?
            .json()
            .await
            .context("decoding search response")?;
        Ok(resp.items)
    }

    /// ISO-8601 durations keyed by video id, for the ids the API knows about.
    async fn durations(&self, ids: &[String]) -> Result<HashMap<String, String>> {
        let url = self.endpoint("videos")?;
        let joined = ids.join(",");
        let resp: VideosResponse = self
            .client
            .get(url)
            .query(&[("part", "contentDetails"), ("id", joined.as_str()), ("key", self.api_key.as_str())])
            .send()
            .await
            .context("sending videos request")?
            .error_for_status()
            .context("videos request rejected")?
            .json()
            .await
            .context("decoding videos response")?;
        Ok(resp
            .items
            .into_iter()
            .filter(|v| !v.id.is_empty())
            .map(|v| (v.id, v.content_details.duration))
            .collect())
    }
}

#[async_trait]
impl VideoSource for YoutubeSource {
    fn name(&self) -> &str {
        "youtube"
    }

    async fn search(&self, query: &str, max_results: usize, order: SearchOrder) -> Vec<VideoResource> {
        let items = match self.search_items(query, max_results, order).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("YouTube API error: {:#}", e);
                return Vec::new();
            }
        };
        let items: Vec<(String, Snippet)> = items
            .into_iter()
            .filter_map(|it| it.id.video_id.filter(|id| !id.is_empty()).map(|id| (id, it.snippet)))
            .collect();
        if items.is_empty() {
            return Vec::new();
        }

        let ids: Vec<String> = items.iter().map(|(id, _)| id.clone()).collect();
        let durations = match self.durations(&ids).await {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!("YouTube duration lookup failed, continuing without durations: {:#}", e);
                HashMap::new()
            }
        };
        tracing::debug!("video search returned {} items, {} with durations", items.len(), durations.len());

        items
            .into_iter()
            .map(|(id, snippet)| {
                let duration = durations.get(&id).map(String::as_str);
                video_from_parts(id, snippet.title, snippet.channel_title, snippet.published_at, duration)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_tolerates_missing_fields() {
        let json = r#"{"items":[
            {"id":{"kind":"youtube#video","videoId":"a1"},"snippet":{"title":"Intro","channelTitle":"Chan","publishedAt":"2024-01-01T00:00:00Z"}},
            {"id":{"kind":"youtube#video","videoId":"b2"}},
            {"id":{"kind":"youtube#channel"}}
        ]}"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.items.len(), 3);
        assert_eq!(resp.items[0].snippet.channel_title, "Chan");
        assert_eq!(resp.items[1].snippet.title, "");
        assert!(resp.items[2].id.video_id.is_none());
        let empty: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.items.is_empty());
    }

    #[test]
    fn videos_response_reads_durations() {
        let json = r#"{"items":[{"id":"a1","contentDetails":{"duration":"PT2M5S"}}]}"#;
        let resp: VideosResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.items[0].content_details.duration, "PT2M5S");
    }

    #[test]
    fn endpoints_keep_base_path() {
        let cfg = YoutubeConfig { api_key: None, base_url: "http://localhost:9/youtube/v3".into() };
        let src = YoutubeSource::new(reqwest::Client::new(), "k", &cfg).unwrap();
        assert_eq!(src.endpoint("search").unwrap().as_str(), "http://localhost:9/youtube/v3/search");
        assert_eq!(src.endpoint("videos").unwrap().as_str(), "http://localhost:9/youtube/v3/videos");
    }

    #[test]
    fn rejects_bad_base_url() {
        let cfg = YoutubeConfig { api_key: None, base_url: "not a url".into() };
        assert!(YoutubeSource::new(reqwest::Client::new(), "k", &cfg).is_err());
    }
}
