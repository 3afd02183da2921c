//! Conversion from raw scraped text to a typed [`CatalogEntry`].
//!
//! Every function here is pure. Failures are data-integrity errors and are
//! never defaulted away.

use std::str::FromStr;

use bookcat_core::{CatalogEntry, Rating};
use reqwest::Url;
use rust_decimal::Decimal;

use crate::error::ScraperError;
use crate::types::{RawDetailEntry, RawListingEntry};

/// Character sequences removed from price text before it is parsed.
///
/// The site serves UTF-8 without always declaring a charset, so the pound
/// sign (bytes `C2 A3`) often arrives decoded as Latin-1. Longer sequences
/// are listed first so `"Â£"` is removed as a unit.
///
/// | sequence | source |
/// |---|---|
/// | `"Â£"` (U+00C2 U+00A3) | `C2 A3` read as Latin-1 |
/// | `"£"` (U+00A3) | the currency symbol itself |
/// | `"Â"` (U+00C2) | lone lead byte from a partial mis-decode |
/// | `"\u{FFFD}"` | replacement character from a lossy decode |
pub const PRICE_STRIP_SEQUENCES: [&str; 4] =
    ["\u{00C2}\u{00A3}", "\u{00A3}", "\u{00C2}", "\u{FFFD}"];

/// Parses a listing price such as `"£51.77"` into a decimal amount.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidPrice`] if what remains after stripping
/// the currency symbol and its encoding artifacts is not a non-negative
/// decimal number.
pub fn normalize_price(raw: &str) -> Result<Decimal, ScraperError> {
    let mut cleaned = raw.to_owned();
    for sequence in PRICE_STRIP_SEQUENCES {
        cleaned = cleaned.replace(sequence, "");
    }
    let cleaned = cleaned.trim();

    let invalid = |reason: String| ScraperError::InvalidPrice {
        raw: raw.to_owned(),
        reason,
    };

    if cleaned.is_empty() {
        return Err(invalid("no numeric text".into()));
    }
    let amount = Decimal::from_str(cleaned).map_err(|e| invalid(e.to_string()))?;
    if amount.is_sign_negative() {
        return Err(invalid("negative amount".into()));
    }
    Ok(amount)
}

/// Maps a rating label word to [`Rating`].
///
/// # Errors
///
/// Returns [`ScraperError::Rating`] for any word outside `One`..`Five`.
pub fn normalize_rating(token: &str) -> Result<Rating, ScraperError> {
    Ok(Rating::from_label(token)?)
}

/// Removes leading `../` and `./` segments and any leading `/`, leaving a
/// path relative to the site root.
#[must_use]
pub fn strip_up_segments(path: &str) -> &str {
    let mut rest = path.trim();
    loop {
        if let Some(stripped) = rest.strip_prefix("../") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else {
            return rest.trim_start_matches('/');
        }
    }
}

/// Resolves a cover image path against the site root.
///
/// `"../../media/cache/ab/cd/x.jpg"` under `http://books.toscrape.com/`
/// becomes `http://books.toscrape.com/media/cache/ab/cd/x.jpg`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if the joined URL is invalid.
pub fn resolve_image_url(relative: &str, site_root: &Url) -> Result<String, ScraperError> {
    let path = strip_up_segments(relative);
    site_root
        .join(path)
        .map(String::from)
        .map_err(|e| ScraperError::InvalidUrl {
            url: relative.to_owned(),
            reason: e.to_string(),
        })
}

/// Combines a listing card and its detail page into a [`CatalogEntry`].
///
/// Title and availability pass through verbatim.
///
/// # Errors
///
/// Propagates price, rating, and image URL failures.
pub fn normalize_entry(
    listing: RawListingEntry,
    detail: RawDetailEntry,
    site_root: &Url,
) -> Result<CatalogEntry, ScraperError> {
    let price = normalize_price(&listing.raw_price)?;
    let rating = normalize_rating(&listing.rating_token)?;
    let image_url = resolve_image_url(&detail.image_ref, site_root)?;

    Ok(CatalogEntry {
        title: listing.title,
        price,
        rating,
        availability: listing.raw_availability,
        category: detail.category,
        image_url,
    })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
