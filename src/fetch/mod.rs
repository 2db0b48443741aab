// src/fetch/mod.rs

pub mod urls;

use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::error::FetchError;
use crate::process::raw_table::{RawTable, TABLE_SELECTOR};

/// Anything that can hand back the HTML body behind a URL.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn get_page(&self, url: &Url) -> Result<String, FetchError>;
}

/// `PageSource` backed by a real HTTP client.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn classify(url: &Url, err: reqwest::Error) -> FetchError {
    if let Some(status) = err.status() {
        return FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        };
    }
    if err.is_builder() || err.is_redirect() {
        return FetchError::Request(err.to_string());
    }
    FetchError::Connection {
        url: url.to_string(),
        message: err.to_string(),
    }
}

impl PageSource for HttpSource {
    async fn get_page(&self, url: &Url) -> Result<String, FetchError> {
        debug!("Fetching text from {}", url);
        let body = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify(url, e))?
            .error_for_status()
            .map_err(|e| classify(url, e))?
            .bytes()
            .await
            .map_err(|e| classify(url, e))?;
        decode_body(&body)
    }
}

/// The report pages are UTF-8 whatever the response headers claim.
pub fn decode_body(body: &[u8]) -> Result<String, FetchError> {
    String::from_utf8(body.to_vec())
        .map_err(|e| FetchError::Parse(format!("page body is not valid UTF-8: {}", e)))
}

/// Fetch and parse the export table for `year`.
///
/// A connection failure is retried exactly once after `retry_delay`; whatever the second
/// attempt returns is final. Other errors are returned straight away.
#[instrument(level = "info", skip(source, base, retry_delay))]
pub async fn fetch_year<S: PageSource>(
    source: &S,
    base: &Url,
    year: i32,
    retry_delay: Duration,
) -> Result<RawTable, FetchError> {
    let url = urls::year_url(base, year)?;

    info!(%url, "extracting data from {}", year);
    let html = match source.get_page(&url).await {
        Ok(html) => html,
        Err(e) if e.is_transient() => {
            warn!(%url, error = %e, delay_s = retry_delay.as_secs_f64(), "connection failed, trying again");
            sleep(retry_delay).await;
            info!(%url, "extracting data from {} (retry)", year);
            source.get_page(&url).await?
        }
        Err(e) => return Err(e),
    };

    RawTable::from_html(&html, TABLE_SELECTOR)
}
