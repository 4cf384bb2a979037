use std::sync::Arc;

use crate::sources::{ArticleSource, VideoSource};
use crate::types::{LearningPlan, PlanRequest, WeekPlan};

const THEMES: [&str; 4] = ["Foundations", "Core Concepts", "Advanced Topics", "Project & Practice"];

/// Drives both sources and partitions their results into weeks.
///
/// Holds no state between calls; each `assemble` rebuilds the plan from scratch.
pub struct PlanAssembler {
    videos: Arc<dyn VideoSource>,
    articles: Arc<dyn ArticleSource>,
}

impl PlanAssembler {
    pub fn new(videos: Arc<dyn VideoSource>, articles: Arc<dyn ArticleSource>) -> Self {
        Self { videos, articles }
    }

    pub async fn assemble(&self, req: &PlanRequest) -> LearningPlan {
        // callers validate sizes; an overflowing product saturates
        let total_videos = req.total_videos().unwrap_or(usize::MAX);
        let total_articles = req.total_articles().unwrap_or(usize::MAX);
        let query = video_query(&req.skill);
        let slug = tag_slug(&req.skill);

        let (videos, articles) = futures::join!(
            self.videos.search(&query, total_videos, req.order),
            self.articles.fetch(&slug, total_articles),
        );
        tracing::debug!(
            "{} returned {}/{} videos, {} returned {}/{} articles",
            self.videos.name(),
            videos.len(),
            total_videos,
            self.articles.name(),
            articles.len(),
            total_articles
        );
        if videos.is_empty() && total_videos > 0 {
            tracing::warn!("no videos found for '{}'", query);
        }
        if articles.is_empty() && total_articles > 0 {
            tracing::warn!("no articles found for tag '{}'", slug);
        }

        let videos = pad_to(&videos, total_videos);
        let articles = pad_to(&articles, total_articles);

        let weeks = (0..req.weeks)
            .map(|i| WeekPlan {
                week: i + 1,
                theme: theme_for(i),
                videos: week_slice(&videos, i, req.videos_per_week),
                articles: week_slice(&articles, i, req.articles_per_week),
                activities: activities_for(i, &req.skill),
            })
            .collect();

        LearningPlan { skill: req.skill.clone(), weeks }
    }
}

pub fn video_query(skill: &str) -> String {
    format!("{skill} tutorial")
}

/// Lower-cased, trimmed, whitespace runs collapsed to single hyphens.
pub fn tag_slug(skill: &str) -> String {
    skill
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Repeat `items` cyclically until exactly `required` long. Empty input stays empty.
pub fn pad_to<T: Clone>(items: &[T], required: usize) -> Vec<T> {
    items.iter().cycle().take(required).cloned().collect()
}

fn week_slice<T: Clone>(items: &[T], week_index: usize, per_week: usize) -> Vec<T> {
    let Some(start) = week_index.checked_mul(per_week) else { return Vec::new() };
    let Some(end) = start.checked_add(per_week) else { return Vec::new() };
    items.get(start..end).map(<[T]>::to_vec).unwrap_or_default()
}

pub fn theme_for(week_index: usize) -> String {
    THEMES
        .get(week_index)
        .map(|t| t.to_string())
        .unwrap_or_else(|| format!("Week {}", week_index + 1))
}

pub fn activities_for(week_index: usize, skill: &str) -> String {
    match week_index {
        0 => format!(
            "Set up your environment for {skill}. Work through basic examples covered in the videos \
             and summarise the key concepts in your own words."
        ),
        1 => format!(
            "Experiment with building small components or programs using {skill}. \
             Complete exercises from articles and implement variations."
        ),
        2 => format!(
            "Apply what you've learned about {skill} to a mini-project. \
             Focus on more advanced features and read deeper resources."
        ),
        _ => format!(
            "Develop a capstone project incorporating multiple concepts of {skill}. \
             Write a blog post or create a video summarising your project and share it."
        ),
    }
}
