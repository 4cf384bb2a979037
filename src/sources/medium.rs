use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use url::Url;

use crate::mapping::article_from_parts;
use crate::sources::config::TAG_PLACEHOLDER;
use crate::sources::feed::parse_entries;
use crate::sources::{ArticleSource, MediumConfig};
use crate::types::ArticleResource;

/// Medium tag feed (`/feed/tag/<slug>`). Medium has no search API, only RSS.
pub struct MediumSource {
    client: reqwest::Client,
    template: String,
}

impl MediumSource {
    pub fn new(client: reqwest::Client, cfg: &MediumConfig) -> Result<Self> {
        let template = cfg.feed_url_template.trim().to_string();
        if !template.contains(TAG_PLACEHOLDER) {
            return Err(anyhow!("feed URL template must contain {TAG_PLACEHOLDER}: {template}"));
        }
        Url::parse(&template.replace(TAG_PLACEHOLDER, "tag"))
            .with_context(|| format!("invalid feed URL template: {template}"))?;
        Ok(Self { client, template })
    }

    pub fn feed_url(&self, tag_slug: &str) -> Result<Url> {
        let encoded: String = url::form_urlencoded::byte_serialize(tag_slug.as_bytes()).collect();
        let raw = self.template.replace(TAG_PLACEHOLDER, &encoded);
        Url::parse(&raw).with_context(|| format!("invalid feed URL: {raw}"))
    }

    async fn fetch_feed(&self, tag_slug: &str) -> Result<String> {
        let url = self.feed_url(tag_slug)?;
        tracing::debug!("fetching feed {}", url);
        self.client
            .get(url)
            .send()
            .await
            .context("sending feed request")?
            .error_for_status()
            .context("feed request rejected")?
            .text()
            .await
            .context("reading feed body")
    }
}

#[async_trait]
impl ArticleSource for MediumSource {
    fn name(&self) -> &str {
        "medium"
    }

    async fn fetch(&self, tag_slug: &str, max_results: usize) -> Vec<ArticleResource> {
        let body = match self.fetch_feed(tag_slug).await {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!("feed for tag '{}' unavailable: {:#}", tag_slug, e);
                return Vec::new();
            }
        };
        let articles: Vec<ArticleResource> = parse_entries(&body, max_results)
            .iter()
            .map(|e| article_from_parts(&e.title, &e.link, e.published_or_updated(), e.summary_or_content()))
            .collect();
        tracing::debug!("feed for tag '{}' returned {} articles", tag_slug, articles.len());
        articles
    }
}
