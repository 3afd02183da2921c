//! Detail page parser.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::error::ScraperError;
use crate::listing::trimmed_text;
use crate::normalize::strip_up_segments;
use crate::types::{Document, RawDetailEntry};

static BREADCRUMB_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ul.breadcrumb li a").expect("valid breadcrumb selector"));
static ACTIVE_IMAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".item.active img").expect("valid image selector"));

/// Extracts the category and cover image path from a detail page.
///
/// The breadcrumb reads `Home > Books > <category> > <title>`, where the
/// final node is plain text; the category is the last linked segment.
///
/// # Errors
///
/// Returns [`ScraperError::MissingElement`] if the page has no breadcrumb
/// links or no active product image with a `src`.
pub fn parse_detail(doc: &Document) -> Result<RawDetailEntry, ScraperError> {
    let html = Html::parse_document(&doc.body);
    let missing = |what: &'static str| ScraperError::MissingElement {
        what,
        context: "detail page".to_owned(),
        url: doc.url.to_string(),
    };

    let category = html
        .select(&BREADCRUMB_LINK)
        .last()
        .and_then(trimmed_text)
        .ok_or_else(|| missing("breadcrumb category (ul.breadcrumb li a)"))?;

    let image_ref = html
        .select(&ACTIVE_IMAGE)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(strip_up_segments)
        .filter(|src| !src.is_empty())
        .ok_or_else(|| missing("product image (.item.active img[src])"))?
        .to_owned();

    Ok(RawDetailEntry {
        category,
        image_ref,
    })
}
