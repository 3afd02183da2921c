//! Lazy walk over numbered listing pages.
//!
//! Listing pages live at `{root}catalogue/page-{N}.html` for `N = 1, 2, 3, …`.
//! There is no "next" link to follow and no total count: the first 404 marks
//! the end of the catalog.

use crate::client::{listing_page_url, CatalogClient, FetchOutcome};
use crate::error::ScraperError;
use crate::types::Document;

/// Produces listing pages one at a time until the site answers 404.
///
/// Any page numbered above `max_pages` that still exists is treated as a
/// runaway and fails with [`ScraperError::PaginationLimit`], so at most
/// `max_pages + 1` listing requests are ever made.
pub struct ListingPages<'a> {
    client: &'a CatalogClient,
    next: usize,
    max_pages: usize,
    done: bool,
}

impl<'a> ListingPages<'a> {
    #[must_use]
    pub fn new(client: &'a CatalogClient, max_pages: usize) -> Self {
        Self {
            client,
            next: 1,
            max_pages,
            done: false,
        }
    }

    /// Fetches the next listing page.
    ///
    /// Returns `Ok(None)` once a page is not found, and on every call after.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::PaginationLimit`] if page `max_pages + 1` exists.
    /// - Any fetch error from [`CatalogClient::fetch`]. The pager is finished
    ///   after an error.
    pub async fn next_page(&mut self) -> Result<Option<(usize, Document)>, ScraperError> {
        if self.done {
            return Ok(None);
        }

        let page = self.next;
        let url = listing_page_url(self.client.base_url(), page)?;
        let outcome = self.client.fetch(&url).await;

        match outcome {
            Ok(FetchOutcome::NotFound) => {
                self.done = true;
                tracing::info!(page, %url, "listing page not found; pagination complete");
                Ok(None)
            }
            Ok(FetchOutcome::Found(_)) if page > self.max_pages => {
                self.done = true;
                Err(ScraperError::PaginationLimit {
                    base_url: self.client.base_url().to_string(),
                    max_pages: self.max_pages,
                })
            }
            Ok(FetchOutcome::Found(doc)) => {
                if page == self.max_pages {
                    tracing::warn!(
                        page,
                        max_pages = self.max_pages,
                        "reached the last allowed listing page"
                    );
                }
                self.next += 1;
                Ok(Some((page, doc)))
            }
            Err(e) => {
                self.done = true;
                Err(e)
            }
        }
    }
}
