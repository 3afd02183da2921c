pub mod client;
pub mod crawl;
pub mod detail;
pub mod error;
pub mod listing;
pub mod normalize;
pub mod pagination;
pub mod types;

pub use client::{CatalogClient, FetchOutcome};
pub use crawl::{crawl_catalog, CrawlOptions, CrawlReport};
pub use detail::parse_detail;
pub use error::ScraperError;
pub use listing::parse_listing;
pub use normalize::{normalize_entry, normalize_price, normalize_rating, resolve_image_url};
pub use pagination::ListingPages;
pub use types::{Document, RawDetailEntry, RawListingEntry};
