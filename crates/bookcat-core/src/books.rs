use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Star rating shown on a catalog card, one to five.
///
/// Serialized as its integer value so the artifact carries `1..=5` rather
/// than the site's label words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    /// Label word → rating. The site encodes ratings as a class name such
    /// as `star-rating Three`; only these five words are recognized.
    const LABELS: [(&'static str, Rating); 5] = [
        ("One", Rating::One),
        ("Two", Rating::Two),
        ("Three", Rating::Three),
        ("Four", Rating::Four),
        ("Five", Rating::Five),
    ];

    /// Maps a label word to a rating. Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownRating`] for any label outside the table.
    pub fn from_label(label: &str) -> Result<Self, CoreError> {
        Self::LABELS
            .iter()
            .find(|(word, _)| *word == label)
            .map(|(_, rating)| *rating)
            .ok_or_else(|| CoreError::UnknownRating(label.to_string()))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Rating::One => 1,
            Rating::Two => 2,
            Rating::Three => 3,
            Rating::Four => 4,
            Rating::Five => 5,
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl TryFrom<u8> for Rating {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::One),
            2 => Ok(Rating::Two),
            3 => Ok(Rating::Three),
            4 => Ok(Rating::Four),
            5 => Ok(Rating::Five),
            other => Err(CoreError::RatingOutOfRange(other)),
        }
    }
}

/// A fully normalized book that has not yet been numbered.
///
/// The crawler emits these in discovery order; [`assign_ids`] turns them
/// into [`CatalogRecord`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    /// Amount in the site's currency, symbol stripped.
    pub price: Decimal,
    pub rating: Rating,
    /// Display string as shown on the listing, e.g. `"In stock"`.
    pub availability: String,
    /// Deepest breadcrumb segment of the detail page.
    pub category: String,
    /// Absolute URL of the cover image.
    pub image_url: String,
}

/// One row of the persisted catalog. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: u32,
    pub title: String,
    pub price: Decimal,
    pub rating: Rating,
    pub availability: String,
    pub category: String,
    pub image_url: String,
}

impl CatalogRecord {
    #[must_use]
    pub fn from_entry(id: u32, entry: CatalogEntry) -> Self {
        Self {
            id,
            title: entry.title,
            price: entry.price,
            rating: entry.rating,
            availability: entry.availability,
            category: entry.category,
            image_url: entry.image_url,
        }
    }
}

/// Numbers entries `1..=N` in the order given.
///
/// Ids come from position alone; nothing from the source site is consulted.
#[must_use]
pub fn assign_ids(entries: Vec<CatalogEntry>) -> Vec<CatalogRecord> {
    entries
        .into_iter()
        .zip(1u32..)
        .map(|(entry, id)| CatalogRecord::from_entry(id, entry))
        .collect()
}
