//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// Selector for every anchor element (with or without href).
pub static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("a"));

/// Selector for JSON-LD script tags.
pub static JSONLD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| selector("script[type='application/ld+json']"));

/// Selector for `<body>` elements.
pub static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("body"));

/// Selector for `<title>` tags.
pub static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("title"));

/// Selector for all `<meta>` tags.
pub static META_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("meta"));

/// Selector for `<html lang="…">` elements.
pub static HTML_LANG_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("html[lang]"));

/// Selector for the canonical link.
pub static CANONICAL_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("link[rel='canonical']"));

/// Selectors for heading levels 1 through 6, indexed by `level - 1`.
pub static HEADING_SELECTORS: Lazy<[Selector; 6]> = Lazy::new(|| {
    [
        selector("h1"),
        selector("h2"),
        selector("h3"),
        selector("h4"),
        selector("h5"),
        selector("h6"),
    ]
});

/// Selector for `<img>` elements.
pub static IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("img"));

/// Standard hreflang alternates.
pub static HREFLANG_LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| selector("link[rel='alternate'][hreflang]"));

/// Non-standard hreflang alternates declared through `<meta>`.
pub static HREFLANG_META_SELECTOR: Lazy<Selector> =
    Lazy::new(|| selector("meta[name='alternate'][hreflang]"));

pub static ARTICLE_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("article"));
pub static MAIN_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("main"));
pub static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("p"));

/// Microdata scopes and their properties.
pub static ITEMSCOPE_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("[itemscope]"));
pub static ITEMPROP_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("[itemprop]"));

/// RDFa typed resources and their properties.
pub static TYPEOF_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("[typeof]"));
pub static PROPERTY_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("[property]"));

/// Containers treated as navigation when they wrap a link.
pub static MENU_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    selector(
        "nav, [role='navigation'], .menu, .nav, .navbar, .navigation, .main-menu, \
         .main-nav, .site-nav, .dropdown-menu, #menu, #nav, #navigation, #main-menu",
    )
});

/// Elements carrying an aria-label, scanned for ratings and reviews.
pub static ARIA_LABEL_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("[aria-label]"));

/// Short text elements scanned for ratings and reviews.
pub static SHORT_TEXT_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("span, div[role='img']"));

/// Google Maps address controls.
pub static MAPS_ADDRESS_SELECTOR: Lazy<Selector> =
    Lazy::new(|| selector("button[data-item-id='address'], [data-tooltip='Copy address']"));

/// Google Maps phone controls.
pub static MAPS_PHONE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| selector("button[data-item-id^='phone'], [data-tooltip='Copy phone number']"));

/// Explicit knowledge-graph identifiers on any element.
pub static KG_ATTR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| selector("[data-kg-id], [data-google-id], [data-entity-id]"));
