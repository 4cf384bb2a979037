mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::{Reply, StubServer, FEED_XML, SEARCH_JSON, VIDEOS_JSON};
use learnpath::prelude::*;

struct StaticVideos(Vec<VideoResource>);

#[async_trait]
impl VideoSource for StaticVideos {
    fn name(&self) -> &str {
        "static"
    }
    async fn search(&self, _query: &str, _max_results: usize, _order: SearchOrder) -> Vec<VideoResource> {
        self.0.clone()
    }
}

struct NoArticles;

#[async_trait]
impl ArticleSource for NoArticles {
    fn name(&self) -> &str {
        "none"
    }
    async fn fetch(&self, _tag_slug: &str, _max_results: usize) -> Vec<ArticleResource> {
        Vec::new()
    }
}

fn config_for(base: &str) -> Config {
    let mut cfg = Config::default();
    cfg.youtube.api_key = Some("secret".into());
    cfg.youtube.base_url = format!("{base}/yt");
    cfg.medium.feed_url_template = format!("{base}/feed/tag/{{tag}}");
    cfg
}

#[tokio::test]
async fn single_video_fills_every_week() {
    let video = VideoResource {
        title: "React in 100 seconds".into(),
        channel: "Fireship".into(),
        video_id: "r1".into(),
        url: "https://www.youtube.com/watch?v=r1".into(),
        published_at: "2020-01-01T00:00:00Z".into(),
        duration: "2:05".into(),
    };
    let lp = LearnPath::with_sources(Arc::new(StaticVideos(vec![video.clone()])), Arc::new(NoArticles));
    let req = PlanRequest { skill: "React".into(), weeks: 2, videos_per_week: 1, articles_per_week: 1, order: SearchOrder::Relevance };

    let plan = lp.generate(&req).await;

    assert_eq!(plan.weeks.len(), 2);
    assert_eq!(plan.weeks[0].videos, vec![video.clone()]);
    assert_eq!(plan.weeks[1].videos, vec![video]);
    assert!(plan.weeks[0].articles.is_empty());
    assert!(plan.weeks[1].articles.is_empty());
    assert!(plan.weeks[0].activities.starts_with("Set up your environment"));
    assert!(plan.weeks[1].activities.starts_with("Experiment with building"));
    assert_ne!(plan.weeks[0].activities, plan.weeks[1].activities);
}

#[tokio::test]
async fn generates_plan_from_live_sources() {
    let server = StubServer::start(vec![
        ("/yt/search", Reply::json(SEARCH_JSON)),
        ("/yt/videos", Reply::json(VIDEOS_JSON)),
        ("/feed/tag/machine-learning", Reply::xml(FEED_XML)),
    ])
    .await;
    let cfg = config_for(&server.base);
    let lp = LearnPath::from_config(&cfg).unwrap();
    let mut req = LearnPath::default_request(&cfg, " Machine  Learning ");
    req.weeks = 6;
    req.videos_per_week = 2;
    req.articles_per_week = 1;

    let plan = lp.generate(&req).await;

    assert_eq!(plan.weeks.len(), 6);
    assert_eq!(plan.total_videos(), 12);
    assert_eq!(plan.total_articles(), 6);
    let themes: Vec<&str> = plan.weeks.iter().map(|w| w.theme.as_str()).collect();
    assert_eq!(themes, ["Foundations", "Core Concepts", "Advanced Topics", "Project & Practice", "Week 5", "Week 6"]);
    let week_two: Vec<&str> = plan.weeks[1].videos.iter().map(|v| v.video_id.as_str()).collect();
    assert_eq!(week_two, ["c3", "a1"]);
    let articles: Vec<&str> = plan.weeks.iter().map(|w| w.articles[0].url.as_str()).collect();
    assert_eq!(
        articles,
        ["https://medium.com/p/gd", "https://medium.com/p/fs", "https://medium.com/p/third",
         "https://medium.com/p/gd", "https://medium.com/p/fs", "https://medium.com/p/third"]
    );
    assert!(server.requests_to("/yt/search")[0].contains("maxResults=12"));
    assert_eq!(server.requests_to("/feed/tag/machine-learning").len(), 1);
}

#[tokio::test]
async fn plan_survives_every_source_failing() {
    let server = StubServer::start(vec![]).await;
    let cfg = config_for(&server.base);
    let lp = LearnPath::from_config(&cfg).unwrap();

    let plan = lp.generate(&LearnPath::default_request(&cfg, "Rust")).await;

    assert_eq!(plan.weeks.len(), 4);
    assert_eq!(plan.total_videos(), 0);
    assert_eq!(plan.total_articles(), 0);
    assert_eq!(plan.weeks[3].theme, "Project & Practice");
}

#[test]
fn missing_api_key_is_a_setup_error() {
    let mut cfg = Config::default();
    cfg.youtube.api_key = Some("   ".into());
    assert!(LearnPath::from_config(&cfg).is_err());
}

#[test]
fn bad_feed_template_is_a_setup_error() {
    let mut cfg = Config::default();
    cfg.youtube.api_key = Some("k".into());
    cfg.medium.feed_url_template = "https://medium.com/feed/tag/rust".into();
    assert!(LearnPath::from_config(&cfg).is_err());
}
