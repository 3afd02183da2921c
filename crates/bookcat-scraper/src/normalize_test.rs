use super::*;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn root() -> Url {
    Url::parse("http://books.toscrape.com/").unwrap()
}

// -----------------------------------------------------------------------
// normalize_price
// -----------------------------------------------------------------------

#[test]
fn price_with_pound_sign() {
    assert_eq!(normalize_price("£51.77").unwrap(), dec("51.77"));
}

#[test]
fn price_with_latin1_mojibake_matches_clean_form() {
    assert_eq!(
        normalize_price("Â£51.77").unwrap(),
        normalize_price("£51.77").unwrap()
    );
}

#[test]
fn price_with_stray_lead_byte_and_whitespace() {
    assert_eq!(normalize_price("  Â 13.99\n").unwrap(), dec("13.99"));
}

#[test]
fn price_with_replacement_character() {
    assert_eq!(normalize_price("\u{FFFD}20.66").unwrap(), dec("20.66"));
}

#[test]
fn price_keeps_scale_for_round_tripping() {
    assert_eq!(normalize_price("£10.00").unwrap().to_string(), "10.00");
}

#[test]
fn price_without_symbol_is_accepted() {
    assert_eq!(normalize_price("7.5").unwrap(), dec("7.5"));
}

#[test]
fn price_symbol_only_is_an_error() {
    let err = normalize_price("£").unwrap_err();
    assert!(matches!(err, ScraperError::InvalidPrice { .. }));
}

#[test]
fn price_with_other_currency_is_an_error() {
    let err = normalize_price("$51.77").unwrap_err();
    assert!(
        matches!(err, ScraperError::InvalidPrice { ref raw, .. } if raw == "$51.77"),
        "expected InvalidPrice, got: {err:?}"
    );
}

#[test]
fn price_negative_is_an_error() {
    assert!(normalize_price("£-1.00").is_err());
}

// -----------------------------------------------------------------------
// normalize_rating
// -----------------------------------------------------------------------

#[test]
fn rating_three() {
    assert_eq!(normalize_rating("Three").unwrap().value(), 3);
}

#[test]
fn rating_zero_is_an_error() {
    let err = normalize_rating("Zero").unwrap_err();
    assert!(
        matches!(err, ScraperError::Rating(bookcat_core::CoreError::UnknownRating(ref l)) if l == "Zero"),
        "expected UnknownRating, got: {err:?}"
    );
}

// -----------------------------------------------------------------------
// resolve_image_url
// -----------------------------------------------------------------------

#[test]
fn image_url_strips_up_segments() {
    assert_eq!(
        resolve_image_url("../../media/cache/fe/72/fe72.jpg", &root()).unwrap(),
        "http://books.toscrape.com/media/cache/fe/72/fe72.jpg"
    );
}

#[test]
fn image_url_already_root_relative() {
    assert_eq!(
        resolve_image_url("media/cache/fe/72/fe72.jpg", &root()).unwrap(),
        "http://books.toscrape.com/media/cache/fe/72/fe72.jpg"
    );
}

#[test]
fn image_url_leading_slash_stays_under_mirror_root() {
    let mirror = Url::parse("https://mirror.example.com/books/").unwrap();
    assert_eq!(
        resolve_image_url("/media/x.jpg", &mirror).unwrap(),
        "https://mirror.example.com/books/media/x.jpg"
    );
}

#[test]
fn strip_up_segments_mixed_prefixes() {
    assert_eq!(strip_up_segments("./../.././media/a.jpg"), "media/a.jpg");
}

// -----------------------------------------------------------------------
// normalize_entry
// -----------------------------------------------------------------------

fn listing() -> RawListingEntry {
    RawListingEntry {
        title: "A Light in the Attic".to_owned(),
        raw_price: "Â£51.77".to_owned(),
        rating_token: "Three".to_owned(),
        raw_availability: "In stock".to_owned(),
        detail_link: "a-light-in-the-attic_1000/index.html".to_owned(),
    }
}

fn detail() -> RawDetailEntry {
    RawDetailEntry {
        category: "Poetry".to_owned(),
        image_ref: "media/cache/fe/72/fe72.jpg".to_owned(),
    }
}

#[test]
fn normalize_entry_assembles_all_fields() {
    let entry = normalize_entry(listing(), detail(), &root()).unwrap();
    assert_eq!(entry.title, "A Light in the Attic");
    assert_eq!(entry.price, dec("51.77"));
    assert_eq!(entry.rating, Rating::Three);
    assert_eq!(entry.availability, "In stock");
    assert_eq!(entry.category, "Poetry");
    assert_eq!(
        entry.image_url,
        "http://books.toscrape.com/media/cache/fe/72/fe72.jpg"
    );
}

#[test]
fn normalize_entry_fails_on_bad_rating() {
    let mut raw = listing();
    raw.rating_token = "Six".to_owned();
    assert!(matches!(
        normalize_entry(raw, detail(), &root()),
        Err(ScraperError::Rating(_))
    ));
}
