//! Listing page parser: one [`RawListingEntry`] per product card.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;
use crate::types::{Document, RawListingEntry};

static CARD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article.product_pod").expect("valid card selector"));
static TITLE_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3 a").expect("valid title link selector"));
static PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".price_color").expect("valid price selector"));
static RATING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.star-rating").expect("valid rating selector"));
static AVAILABILITY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".availability").expect("valid availability selector"));

const RATING_MARKER_CLASS: &str = "star-rating";

/// Extracts every product card from a listing page, in document order.
///
/// An empty result is valid: a page with no cards parses to an empty `Vec`.
///
/// # Errors
///
/// Returns [`ScraperError::MissingElement`] if any card lacks its title link,
/// title, detail link, price, rating marker, or availability text. A single
/// malformed card fails the whole page.
pub fn parse_listing(doc: &Document) -> Result<Vec<RawListingEntry>, ScraperError> {
    let html = Html::parse_document(&doc.body);
    html.select(&CARD)
        .enumerate()
        .map(|(idx, card)| parse_card(card, idx + 1, doc))
        .collect()
}

fn parse_card(
    card: ElementRef<'_>,
    position: usize,
    doc: &Document,
) -> Result<RawListingEntry, ScraperError> {
    let missing = |what: &'static str| ScraperError::MissingElement {
        what,
        context: format!("product card {position}"),
        url: doc.url.to_string(),
    };

    let link = card
        .select(&TITLE_LINK)
        .next()
        .ok_or_else(|| missing("title link (h3 a)"))?;
    let title = non_empty_attr(link, "title").ok_or_else(|| missing("title attribute"))?;
    let detail_link = non_empty_attr(link, "href").ok_or_else(|| missing("detail link href"))?;

    let raw_price = card
        .select(&PRICE)
        .next()
        .and_then(trimmed_text)
        .ok_or_else(|| missing("price (.price_color)"))?;

    let rating_token = card
        .select(&RATING)
        .next()
        .and_then(|p| {
            p.value()
                .classes()
                .find(|class| *class != RATING_MARKER_CLASS)
                .map(str::to_owned)
        })
        .ok_or_else(|| missing("rating marker (p.star-rating <word>)"))?;

    let raw_availability = card
        .select(&AVAILABILITY)
        .next()
        .and_then(trimmed_text)
        .ok_or_else(|| missing("availability (.availability)"))?;

    Ok(RawListingEntry {
        title,
        raw_price,
        rating_token,
        raw_availability,
        detail_link,
    })
}

/// Attribute value exactly as scraped; `None` when absent or blank.
fn non_empty_attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value()
        .attr(name)
        .filter(|v| !v.trim().is_empty())
        .map(str::to_owned)
}

/// Concatenated descendant text, trimmed. `None` when nothing but whitespace.
pub(crate) fn trimmed_text(el: ElementRef<'_>) -> Option<String> {
    let text: String = el.text().collect();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
