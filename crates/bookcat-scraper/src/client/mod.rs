//! HTTP client for the catalog site's listing and detail pages.

mod urls;

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::types::Document;

pub use urls::{listing_page_url, resolve_link};

/// Result of a single page fetch.
///
/// `NotFound` is not an error here: for listing pages it is how the site
/// signals the end of pagination. Callers decide what a 404 means.
#[derive(Debug)]
pub enum FetchOutcome {
    Found(Document),
    NotFound,
}

/// HTTP client bound to one catalog site root.
///
/// One network round trip per [`CatalogClient::fetch`] call. There is no
/// caching and no retry; any non-404 failure is returned to the caller.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a `CatalogClient` for the site rooted at `base_url`.
    ///
    /// A missing trailing slash on `base_url` is added so relative joins stay
    /// underneath it.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] if `base_url` is not an absolute http(s) URL.
    /// - [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let normalized = bookcat_core::config::normalize_base_url(base_url).ok_or_else(|| {
            ScraperError::InvalidUrl {
                url: base_url.to_owned(),
                reason: "must be an absolute http(s) URL".into(),
            }
        })?;
        let base_url = Url::parse(&normalized).map_err(|e| ScraperError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// The site root every listing page and image path is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches `url` and returns its markup.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx status other than 404.
    /// - [`ScraperError::Http`] for network, TLS, timeout, or body-decoding failures.
    pub async fn fetch(&self, url: &Url) -> Result<FetchOutcome, ScraperError> {
        let response = self
            .client
            .get(url.clone())
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(%url, "page not found");
            return Ok(FetchOutcome::NotFound);
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(FetchOutcome::Found(Document {
            url: url.clone(),
            body,
        }))
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
