//! Crawl orchestration: listing pages → per-card detail pages → entries.

use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::Url;

use bookcat_core::CatalogEntry;

use crate::client::{resolve_link, CatalogClient, FetchOutcome};
use crate::detail::parse_detail;
use crate::error::ScraperError;
use crate::listing::parse_listing;
use crate::normalize::normalize_entry;
use crate::pagination::ListingPages;
use crate::types::RawListingEntry;

/// Tuning knobs for [`crawl_catalog`].
#[derive(Debug, Clone, Copy)]
pub struct CrawlOptions {
    pub max_pages: usize,
    /// Detail pages in flight per listing page. Values below 1 are treated as 1.
    pub detail_concurrency: usize,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            max_pages: 1000,
            detail_concurrency: 1,
        }
    }
}

/// Everything one successful crawl produced.
#[derive(Debug)]
pub struct CrawlReport {
    /// Listing pages that returned content (the terminating 404 is not counted).
    pub pages_visited: usize,
    /// Entries in discovery order: page ascending, then card order.
    pub entries: Vec<CatalogEntry>,
}

/// Crawls the whole catalog.
///
/// **All-or-nothing**: the first fetch, parse, or normalization failure
/// anywhere aborts the crawl and discards every entry collected so far.
/// Only a 404 on a listing page ends the crawl successfully.
///
/// Detail pages for one listing page may be fetched concurrently, but
/// entries are always appended in the order their cards appear.
///
/// # Errors
///
/// Returns the first [`ScraperError`] encountered. A 404 on a detail page is
/// [`ScraperError::DetailNotFound`].
pub async fn crawl_catalog(
    client: &CatalogClient,
    options: CrawlOptions,
) -> Result<CrawlReport, ScraperError> {
    let concurrency = options.detail_concurrency.max(1);
    let mut pages = ListingPages::new(client, options.max_pages);
    let mut entries: Vec<CatalogEntry> = Vec::new();
    let mut pages_visited = 0usize;

    while let Some((page, doc)) = pages.next_page().await? {
        let listing = parse_listing(&doc)?;
        tracing::info!(page, cards = listing.len(), url = %doc.url, "parsed listing page");

        let page_entries: Vec<CatalogEntry> = stream::iter(listing)
            .map(|raw| assemble_entry(client, &doc.url, raw))
            .buffered(concurrency)
            .try_collect()
            .await?;

        entries.extend(page_entries);
        pages_visited += 1;
    }

    tracing::info!(
        pages_visited,
        entries = entries.len(),
        "catalog crawl complete"
    );

    Ok(CrawlReport {
        pages_visited,
        entries,
    })
}

/// Fetches one card's detail page and normalizes the pair.
async fn assemble_entry(
    client: &CatalogClient,
    listing_url: &Url,
    raw: RawListingEntry,
) -> Result<CatalogEntry, ScraperError> {
    let detail_url = resolve_link(listing_url, &raw.detail_link)?;

    let doc = match client.fetch(&detail_url).await? {
        FetchOutcome::Found(doc) => doc,
        FetchOutcome::NotFound => {
            return Err(ScraperError::DetailNotFound {
                url: detail_url.to_string(),
            })
        }
    };

    let detail = parse_detail(&doc)?;
    tracing::debug!(title = %raw.title, category = %detail.category, "parsed detail page");
    normalize_entry(raw, detail, client.base_url())
}
