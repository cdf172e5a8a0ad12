use std::time::Duration;

use anyhow::{bail, Context, Result};
use feed::FeedConfig;
use lookbook::LabelFormatter;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub search_url: String,
    pub search_path: String,
    pub page_size: u32,
    pub exhaustion_threshold: u32,
    pub exhaust_on_stale_pages: bool,
    /// `None` keeps the built-in stopword list.
    pub stopwords: Option<Vec<String>>,
    pub initial_query: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let search_url = var("SEARCH_URL").unwrap_or_else(|| "http://localhost:8000".to_string());
        let search_path = var("SEARCH_PATH").unwrap_or_else(|| "/search".to_string());
        let page_size = number(&var, "FEED_PAGE_SIZE", feed::DEFAULT_PAGE_SIZE)?;
        let exhaustion_threshold =
            number(&var, "FEED_EXHAUSTION_THRESHOLD", feed::DEFAULT_EXHAUSTION_THRESHOLD)?;
        let exhaust_on_stale_pages = var("FEED_EXHAUST_ON_STALE_PAGES")
            .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
            .unwrap_or(false);
        let stopwords = var("FEED_STOPWORDS").map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect()
        });
        let initial_query =
            var("FEED_INITIAL_QUERY").unwrap_or_else(|| feed::DEFAULT_QUERY.to_string());
        let request_timeout = Duration::from_secs(number(&var, "FEED_REQUEST_TIMEOUT_SECS", 10)?);

        if !search_url.starts_with("http://") && !search_url.starts_with("https://") {
            bail!("SEARCH_URL must start with http:// or https://");
        }
        if !search_path.starts_with('/') {
            bail!("SEARCH_PATH must start with /");
        }
        if page_size == 0 {
            bail!("FEED_PAGE_SIZE must be at least 1");
        }

        Ok(Self {
            search_url,
            search_path,
            page_size,
            exhaustion_threshold,
            exhaust_on_stale_pages,
            stopwords,
            initial_query,
            request_timeout,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.search_url.trim_end_matches('/'), self.search_path)
    }

    pub fn feed_config(&self) -> FeedConfig {
        FeedConfig {
            page_size: self.page_size,
            exhaustion_threshold: self.exhaustion_threshold,
            exhaust_on_stale_pages: self.exhaust_on_stale_pages,
        }
    }

    pub fn label_formatter(&self) -> LabelFormatter {
        match &self.stopwords {
            Some(words) => LabelFormatter::with_stopwords(words),
            None => LabelFormatter::default(),
        }
    }
}

fn number<T>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(raw) => raw.trim().parse().with_context(|| format!("Invalid {key}: {raw:?}")),
        None => Ok(default),
    }
}
