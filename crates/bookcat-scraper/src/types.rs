//! Intermediate shapes produced by the parsers.
//!
//! The catalog site is static server-rendered HTML. A listing page carries a
//! grid of `article.product_pod` cards:
//!
//! ```text
//! <article class="product_pod">
//!   <div class="image_container"><a href="a-light-in-the-attic_1000/index.html">...</a></div>
//!   <p class="star-rating Three">...</p>
//!   <h3><a href="a-light-in-the-attic_1000/index.html" title="A Light in the Attic">A Light in the ...</a></h3>
//!   <div class="product_price">
//!     <p class="price_color">£51.77</p>
//!     <p class="instock availability"><i class="icon-ok"></i> In stock</p>
//!   </div>
//! </article>
//! ```
//!
//! The card's visible heading is truncated; the full title only lives in the
//! link's `title` attribute. Category and cover image only appear on the
//! detail page, in `ul.breadcrumb` and `.item.active img` respectively.

use reqwest::Url;

/// A fetched page: where it came from and its raw markup.
#[derive(Debug, Clone)]
pub struct Document {
    pub url: Url,
    pub body: String,
}

/// One product card from a listing page, exactly as found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListingEntry {
    pub title: String,
    /// Price text including the currency symbol, e.g. `"£51.77"`.
    pub raw_price: String,
    /// The rating word from the card's class list, e.g. `"Three"`.
    pub rating_token: String,
    pub raw_availability: String,
    /// Link to the detail page, relative to the listing page URL.
    pub detail_link: String,
}

/// Fields only available on a book's detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDetailEntry {
    pub category: String,
    /// Cover image path with leading `../` segments removed.
    pub image_ref: String,
}
