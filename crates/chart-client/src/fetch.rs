use std::time::Duration as StdDuration;

use reqwest::Client;
use tracing::{debug, instrument, warn};

const USER_AGENT: &str = "ChartAggregator/1.0";
const REQUEST_TIMEOUT: StdDuration = StdDuration::from_secs(30);

/// Thin wrapper around a shared [`reqwest::Client`]. Transport failures are
/// not errors at this layer: they are logged and collapse to `None`, and
/// callers treat them as "no data".
#[derive(Debug, Clone)]
pub struct PageFetcher {
    http: Client,
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFetcher {
    #[must_use]
    pub fn new() -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .build()
            .expect("failed to build reqwest client");

        Self { http }
    }

    /// GET a page and return its body. When `id_param` is given, the
    /// effective URL is `url` with the id appended verbatim; callers must
    /// supply a URL-safe value.
    #[instrument(name = "page_fetcher.fetch_page", skip(self))]
    pub async fn fetch_page(&self, url: &str, id_param: Option<&str>) -> Option<String> {
        let effective = match id_param {
            Some(id) => format!("{url}{id}"),
            None => url.to_string(),
        };

        debug!(url = %effective, "fetching page");
        let response = match self.http.get(&effective).send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(url = %effective, error = %error, "page fetch failed");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(url = %effective, status = %response.status(), "page fetch returned error status");
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(error) => {
                warn!(url = %effective, error = %error, "failed to read page body");
                None
            }
        }
    }
}
