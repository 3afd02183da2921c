use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("detail page not found: {url}")]
    DetailNotFound { url: String },

    #[error("missing {what} in {context} of {url}")]
    MissingElement {
        what: &'static str,
        context: String,
        url: String,
    },

    #[error("invalid price \"{raw}\": {reason}")]
    InvalidPrice { raw: String, reason: String },

    #[error("rating error: {0}")]
    Rating(#[from] bookcat_core::CoreError),

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("pagination limit reached for {base_url}: exceeded {max_pages} pages")]
    PaginationLimit { base_url: String, max_pages: usize },
}
