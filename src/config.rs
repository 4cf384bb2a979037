//! Configuration file and environment layer.
//!
//! Lookup order for the file: explicit path, then
//! `<platform config dir>/learnpath/config.toml`. A missing default file means
//! built-in defaults; an explicit path that cannot be loaded is an error.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::sources::{HttpConfig, MediumConfig, YoutubeConfig};
use crate::types::SearchOrder;

pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";
pub const TIMEOUT_ENV: &str = "LEARNPATH_HTTP_TIMEOUT_MS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub youtube: YoutubeConfig,
    pub medium: MediumConfig,
    pub plan: PlanDefaults,
    pub http: HttpConfig,
}

/// Defaults for a plan request when the caller does not say otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanDefaults {
    pub weeks: usize,
    pub videos_per_week: usize,
    pub articles_per_week: usize,
    pub order: SearchOrder,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self { weeks: 4, videos_per_week: 2, articles_per_week: 2, order: SearchOrder::Relevance }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::load_from_file(p).with_context(|| format!("failed to load config from {}", p.display()))?,
            None => match default_config_path() {
                Some(p) if p.exists() => {
                    Self::load_from_file(&p).with_context(|| format!("failed to load config from {}", p.display()))?
                }
                _ => Self::default(),
            },
        };
        cfg.apply_env(|k| std::env::var(k).ok());
        Ok(cfg)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("parsing config TOML")
    }

    /// Environment values win over the file; empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.youtube.api_key = Some(key);
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse() {
                Ok(ms) => self.http.timeout_ms = ms,
                Err(_) => tracing::warn!("ignoring {}={:?}: not a number of milliseconds", TIMEOUT_ENV, raw),
            }
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.youtube.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "learnpath").map(|dirs| dirs.config_dir().join("config.toml"))
}
