//! Page Extraction
//!
//! Walks a loaded page once per phase and assembles a [`PageSnapshot`].
//! Every phase is independent and falls back to its empty value, so missing
//! markup in one place never affects another.

mod types;
mod utils;

pub use types::*;
use utils::*;

use crate::tools::business::scrape_business;
use crate::tools::clean::word_count;
use crate::tools::page::{HtmlPage, PageAccessor};
use crate::tools::schema::scrape_schema;
use crate::types::{
    BusinessFacts, ContentSummary, HeadingGroup, HreflangRecord, ImageSummary, LinkSummary,
    PageSnapshot,
};
use std::collections::BTreeMap;

/// Anchor text recorded for links without visible text.
pub const NO_ANCHOR_TEXT: &str = "No anchor text";

/// Extract a full snapshot from a page.
pub fn extract<P: PageAccessor>(page: &P, opts: &ExtractOptions) -> PageSnapshot {
    log::info!("extracting snapshot for {}", page.url());

    let meta = scrape_meta(page);
    let schema = if opts.structured_data {
        scrape_schema(page)
    } else {
        Vec::new()
    };

    let mut snapshot = PageSnapshot {
        title: page.title(),
        url: page.url().to_string(),
        lang: page.lang(),
        description: meta.description,
        keywords: meta.keywords,
        robots: meta.robots,
        canonical: meta.canonical,
        og_data: meta.og_data,
        twitter_data: meta.twitter_data,
        word_count: word_count(&page.body_text()),
        headings: scrape_headings(page),
        links: scrape_links(page, opts.nav_depth),
        images: scrape_images(page),
        schema,
        hreflang: scrape_hreflang(page),
        content: scrape_content(page),
        business: BusinessFacts::default(),
    };

    if opts.business {
        snapshot.business = scrape_business(page, &snapshot.title, &snapshot.schema);
    }

    log::debug!(
        "snapshot for {}: {} links, {} images, {} schema records",
        snapshot.url,
        snapshot.links.total,
        snapshot.images.total,
        snapshot.schema.len()
    );
    snapshot
}

/// Parse `html` as the document found at `url` and extract a snapshot.
pub fn extract_html(url: &str, html: &str, opts: &ExtractOptions) -> PageSnapshot {
    extract(&HtmlPage::new(url, html), opts)
}

/// Scrape description, keywords, robots, Open Graph, Twitter and canonical.
pub fn scrape_meta<P: PageAccessor>(page: &P) -> MetaTags {
    meta_tags(page)
}

/// Count and text of every heading, keyed `h1` through `h6`.
pub fn scrape_headings<P: PageAccessor>(page: &P) -> BTreeMap<String, HeadingGroup> {
    heading_groups(page)
}

/// Every anchor with its classification and running totals.
pub fn scrape_links<P: PageAccessor>(page: &P, nav_depth: usize) -> LinkSummary {
    link_summary(page, nav_depth)
}

/// Every image with its alt text and the missing-alt count.
pub fn scrape_images<P: PageAccessor>(page: &P) -> ImageSummary {
    image_summary(page)
}

/// Hreflang alternates from `<link>` and, as a fallback, `<meta>`.
pub fn scrape_hreflang<P: PageAccessor>(page: &P) -> Vec<HreflangRecord> {
    crate::merge!(hreflang_links(page), hreflang_metas(page))
}

/// Article, main and paragraph text.
pub fn scrape_content<P: PageAccessor>(page: &P) -> ContentSummary {
    content_summary(page)
}
