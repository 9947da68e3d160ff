use crate::crawlers::PageSource;
use crate::error::Result;
use reqwest::Client;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches pages over HTTP(S).
///
/// No timeout and no retries: a failed request fails the whole run, a hung
/// request hangs it.
#[derive(Debug, Clone)]
pub struct WebSource {
    client: Client,
}

impl WebSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl PageSource for WebSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        let started = std::time::Instant::now();
        ::log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            // The body is still parsed; a page without the expected markup fails there
            ::log::warn!("{} answered {}", url, status);
        }
        let body = response.text().await?;

        ::log::debug!(
            "Fetched {} ({} bytes) in {:.2} seconds",
            url,
            body.len(),
            started.elapsed().as_secs_f64()
        );
        Ok(body)
    }
}
