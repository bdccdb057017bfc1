//! # Site Configuration
//!
//! Defaults come from [`crate::utils::constants`]. A page can override them
//! without a rebuild:
//!
//! - `<body data-api-base="https://api.example.com">` prefixes every request
//! - `<body data-carousel-interval="8000">` changes the slide timer period
//! - `?log=debug` in the page URL raises the console log level

use std::str::FromStr;

use log::Level;
use web_sys::Document;

use super::constants::{
    CAROUSEL_INTERVAL_MS, FOOTER_FRAGMENT_PATH, HEADER_FRAGMENT_PATH, TOP_TOKENS_PATH,
};
use super::url::get_query_params;

/// Runtime configuration of the landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Prefix for every request path. Empty means same origin.
    pub api_base: String,
    pub header_path: String,
    pub footer_path: String,
    pub tokens_path: String,
    pub carousel_interval_ms: u32,
    pub log_level: Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            header_path: HEADER_FRAGMENT_PATH.to_string(),
            footer_path: FOOTER_FRAGMENT_PATH.to_string(),
            tokens_path: TOP_TOKENS_PATH.to_string(),
            carousel_interval_ms: CAROUSEL_INTERVAL_MS,
            log_level: Level::Info,
        }
    }
}

impl SiteConfig {
    /// Defaults plus overrides read from `<body>` data attributes and the
    /// current URL's query string.
    pub fn from_page(document: &Document) -> Self {
        let dataset = document.body().map(|body| body.dataset());
        let query = get_query_params();

        let mut config = Self::default();
        config.apply_overrides(|key| match key {
            "log" => query.get("log").cloned(),
            attribute => dataset.as_ref().and_then(|data| data.get(attribute)),
        });
        config
    }

    /// Apply overrides from `lookup`. Keys are `apiBase`, `carouselInterval`
    /// (camel-cased data attributes) and `log`. Unparseable values are
    /// ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base) = lookup("apiBase") {
            self.api_base = base.trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup("carouselInterval") {
            match raw.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => self.carousel_interval_ms = ms,
                _ => log::warn!("ignoring invalid carousel interval {:?}", raw),
            }
        }

        if let Some(raw) = lookup("log") {
            match Level::from_str(raw.trim()) {
                Ok(level) => self.log_level = level,
                Err(_) => log::warn!("ignoring invalid log level {:?}", raw),
            }
        }
    }

    /// Absolute URL for a request path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
