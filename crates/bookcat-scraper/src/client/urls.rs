//! URL construction for listing pages and relative links.

use reqwest::Url;

use crate::error::ScraperError;

/// Builds the URL of listing page `page` (1-based):
/// `{root}catalogue/page-{page}.html`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if the joined URL cannot be parsed.
pub fn listing_page_url(root: &Url, page: usize) -> Result<Url, ScraperError> {
    let relative = format!("catalogue/page-{page}.html");
    root.join(&relative).map_err(|e| ScraperError::InvalidUrl {
        url: format!("{root}{relative}"),
        reason: e.to_string(),
    })
}

/// Resolves a link found on `page` against that page's URL.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if the link cannot be joined.
pub fn resolve_link(page: &Url, link: &str) -> Result<Url, ScraperError> {
    page.join(link.trim()).map_err(|e| ScraperError::InvalidUrl {
        url: link.to_owned(),
        reason: e.to_string(),
    })
}
