use crate::error::{Result, ScrapeError};
use std::collections::HashMap;
use std::future::Future;

/// Something that can hand back the HTML of a page by URL
pub trait PageSource {
    /// Fetch the page body at `url`
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Pages served from memory, keyed by URL
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pages: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }
}

impl PageSource for StaticSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        ::log::debug!("Serving {} from memory", url);
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::missing("page", url))
    }
}
