use scraper::{ElementRef, Selector};
use std::collections::BTreeMap;
use url::Url;

use super::{MetaTags, NO_ANCHOR_TEXT};
use crate::selectors::{
    ANCHOR_SELECTOR, ARTICLE_SELECTOR, CANONICAL_SELECTOR, HEADING_SELECTORS,
    HREFLANG_LINK_SELECTOR, HREFLANG_META_SELECTOR, IMAGE_SELECTOR, MAIN_SELECTOR, MENU_SELECTOR,
    PARAGRAPH_SELECTOR,
};
use crate::tools::page::{visible_text, PageAccessor};
use crate::types::{
    ContentSummary, HeadingGroup, HreflangRecord, ImageRecord, ImageSummary, LinkRecord,
    LinkSummary, HEADING_LEVELS,
};

/// Where a `<meta>` tag's content lands. Declaration order is priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MetaBucket {
    Description,
    Keywords,
    Robots,
    OpenGraph,
    Twitter,
}

const OG_PREFIX: &str = "og:";
const TWITTER_PREFIX: &str = "twitter:";

fn classify_meta(key: &str) -> Option<MetaBucket> {
    let lower = key.trim().to_ascii_lowercase();
    match lower.as_str() {
        "description" => Some(MetaBucket::Description),
        "keywords" => Some(MetaBucket::Keywords),
        "robots" => Some(MetaBucket::Robots),
        k if k.starts_with(OG_PREFIX) => Some(MetaBucket::OpenGraph),
        k if k.starts_with(TWITTER_PREFIX) => Some(MetaBucket::Twitter),
        _ => None,
    }
}

pub(super) fn meta_tags<P: PageAccessor>(page: &P) -> MetaTags {
    let mut meta = MetaTags::default();

    for el in page.meta_tags() {
        let node = el.value();
        let content = node.attr("content").unwrap_or("").to_string();

        // The higher-priority bucket wins across `name` and `property`; ties go to `name`.
        let classified = [node.attr("name"), node.attr("property")]
            .into_iter()
            .flatten()
            .filter_map(|key| classify_meta(key).map(|bucket| (key.trim(), bucket)))
            .min_by_key(|(_, bucket)| *bucket);

        match classified {
            Some((_, MetaBucket::Description)) => meta.description = content,
            Some((_, MetaBucket::Keywords)) => meta.keywords = content,
            Some((_, MetaBucket::Robots)) => meta.robots = content,
            Some((key, MetaBucket::OpenGraph)) => {
                meta.og_data.insert(key[OG_PREFIX.len()..].to_string(), content);
            }
            Some((key, MetaBucket::Twitter)) => {
                meta.twitter_data
                    .insert(key[TWITTER_PREFIX.len()..].to_string(), content);
            }
            None => {}
        }
    }

    meta.canonical = page
        .select_first(&CANONICAL_SELECTOR)
        .and_then(|el| el.value().attr("href"))
        .map(|href| page.resolve(href))
        .unwrap_or_default();

    meta
}

pub(super) fn heading_groups<P: PageAccessor>(page: &P) -> BTreeMap<String, HeadingGroup> {
    HEADING_LEVELS
        .iter()
        .zip(HEADING_SELECTORS.iter())
        .map(|(level, selector)| {
            let items: Vec<String> = page
                .select_all(selector)
                .into_iter()
                .map(visible_text)
                .collect();
            let group = HeadingGroup {
                count: items.len(),
                items,
            };
            (level.to_string(), group)
        })
        .collect()
}

/// Internal when the link is root-relative, or resolves onto the page's own host.
pub(super) fn is_internal_link(raw_href: &str, resolved: &str, page_host: Option<&str>) -> bool {
    let raw = raw_href.trim();
    if raw.starts_with('/') && !raw.starts_with("//") {
        return true;
    }
    match (page_host, Url::parse(resolved)) {
        (Some(page_host), Ok(url)) => url
            .host_str()
            .map(|host| host.eq_ignore_ascii_case(page_host))
            .unwrap_or(false),
        _ => false,
    }
}

pub(super) fn is_nofollow(el: ElementRef<'_>) -> bool {
    el.value()
        .attr("rel")
        .map(|rel| rel.to_ascii_lowercase().contains("nofollow"))
        .unwrap_or(false)
}

/// Whether any of the nearest `depth` ancestors is a navigation container.
pub(super) fn is_in_navigation(el: ElementRef<'_>, depth: usize) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .take(depth)
        .any(|ancestor| MENU_SELECTOR.matches(&ancestor))
}

pub(super) fn link_summary<P: PageAccessor>(page: &P, nav_depth: usize) -> LinkSummary {
    let host = page.hostname();
    let mut summary = LinkSummary::default();

    for el in page.select_all(&ANCHOR_SELECTOR) {
        let raw_href = el.value().attr("href");
        let url = raw_href.map(|href| page.resolve(href)).unwrap_or_default();
        let anchor = match visible_text(el) {
            text if text.is_empty() => NO_ANCHOR_TEXT.to_string(),
            text => text,
        };

        let record = LinkRecord {
            is_internal: raw_href
                .map(|href| is_internal_link(href, &url, host))
                .unwrap_or(false),
            is_nofollow: is_nofollow(el),
            is_in_menu: is_in_navigation(el, nav_depth),
            url,
            anchor,
        };

        summary.total += 1;
        if record.is_internal {
            summary.internal += 1;
        } else if record.url.starts_with("http") {
            summary.external += 1;
        }
        if record.is_nofollow {
            summary.nofollow += 1;
        } else {
            summary.follow += 1;
        }
        summary.items.push(record);
    }

    summary
}

pub(super) fn image_summary<P: PageAccessor>(page: &P) -> ImageSummary {
    let items: Vec<ImageRecord> = page
        .select_all(&IMAGE_SELECTOR)
        .into_iter()
        .map(|el| {
            let node = el.value();
            let src = node.attr("src").map(|s| page.resolve(s)).unwrap_or_default();
            ImageRecord::new(src, node.attr("alt").unwrap_or(""))
        })
        .collect();

    ImageSummary {
        total: items.len(),
        missing_alt: items.iter().filter(|img| !img.has_alt()).count(),
        items,
    }
}

pub(super) fn hreflang_links<P: PageAccessor>(page: &P) -> Vec<HreflangRecord> {
    page.select_all(&HREFLANG_LINK_SELECTOR)
        .into_iter()
        .map(|el| hreflang_record(page, el, &["href"]))
        .collect()
}

pub(super) fn hreflang_metas<P: PageAccessor>(page: &P) -> Vec<HreflangRecord> {
    page.select_all(&HREFLANG_META_SELECTOR)
        .into_iter()
        .map(|el| hreflang_record(page, el, &["content", "href"]))
        .collect()
}

fn hreflang_record<P: PageAccessor>(
    page: &P,
    el: ElementRef<'_>,
    href_attrs: &[&str],
) -> HreflangRecord {
    let node = el.value();
    HreflangRecord {
        lang: node.attr("hreflang").unwrap_or("").trim().to_string(),
        href: href_attrs
            .iter()
            .find_map(|attr| node.attr(attr))
            .map(|href| page.resolve(href))
            .unwrap_or_default(),
    }
}

pub(super) fn content_summary<P: PageAccessor>(page: &P) -> ContentSummary {
    let first_text = |selector: &Selector| {
        page.select_first(selector)
            .map(visible_text)
            .unwrap_or_default()
    };

    ContentSummary {
        main_content: first_text(&MAIN_SELECTOR),
        article_content: first_text(&ARTICLE_SELECTOR),
        paragraphs: page
            .select_all(&PARAGRAPH_SELECTOR)
            .into_iter()
            .map(visible_text)
            .filter(|text| !text.is_empty())
            .collect(),
    }
}
