//! Persistence for the flat book catalog.
//!
//! The catalog is a single CSV file, replaced wholesale on every successful
//! run. Downstream readers load it once at startup, so it is never appended
//! to or edited in place.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::StoreError;
pub use reader::{read_catalog, verify_ids};
pub use writer::write_catalog;

/// Column order of the catalog file, matching [`bookcat_core::CatalogRecord`].
pub const CATALOG_COLUMNS: [&str; 7] = [
    "id",
    "title",
    "price",
    "rating",
    "availability",
    "category",
    "image_url",
];
