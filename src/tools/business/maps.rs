use once_cell::sync::Lazy;
use regex::Regex;

use super::patterns::{parse_count, parse_rating, REVIEWS_REGEX, STARS_REGEX};
use super::types::{first_success, BusinessContext, Strategy};
use crate::selectors::{
    ARIA_LABEL_SELECTOR, MAPS_ADDRESS_SELECTOR, MAPS_PHONE_SELECTOR, SHORT_TEXT_SELECTOR,
};
use crate::tools::page::{visible_text, PageAccessor};
use crate::types::BusinessFacts;

static MAPS_SUFFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[-–—]\s*Google Maps\s*$").expect("valid regex"));

static COORDINATES_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(-?\d+(?:\.\d+)?),(-?\d+(?:\.\d+)?)").expect("valid regex"));

static CID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?&]cid=(\d+)").expect("valid regex"));

static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d[\d,]*(?:\.\d+)?").expect("valid regex"));

static SHORT_RATING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d(?:[.,]\d)?$").expect("valid regex"));

static SHORT_REVIEWS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\((\d[\d,]*)\)$").expect("valid regex"));

/// Facts from a Google Maps place page: title, URL and the Maps DOM.
pub(super) fn maps_facts<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> BusinessFacts {
    let rating: [Strategy<P, f64>; 3] = [rating_from_text, rating_from_labels, rating_from_spans];
    let reviews: [Strategy<P, u64>; 3] =
        [reviews_from_text, reviews_from_labels, reviews_from_spans];

    BusinessFacts {
        name: maps_name(ctx.title),
        coordinates: coordinates(ctx.url),
        rating: first_success(ctx, &rating),
        reviews: first_success(ctx, &reviews),
        kg_id: CID_REGEX
            .captures(ctx.url)
            .map(|caps| caps[1].to_string()),
        address: crate::first_some!(ctx => address_from_button, address_from_label),
        phone: crate::first_some!(ctx => phone_from_button, phone_from_label),
        ..Default::default()
    }
}

/// Facts from an ordinary page: only a name, taken from the title.
pub(super) fn title_facts<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> BusinessFacts {
    BusinessFacts {
        name: title_name(ctx.title),
        ..Default::default()
    }
}

/// `"Example Hotel - Google Maps"` → `"Example Hotel"`.
pub(super) fn maps_name(title: &str) -> Option<String> {
    non_empty(MAPS_SUFFIX_REGEX.replace(title, "").trim())
}

/// First segment of the title, split on `|` and then on `-`.
pub(super) fn title_name(title: &str) -> Option<String> {
    let first = title.split('|').next().unwrap_or_default();
    let first = first.split(['-', '–']).next().unwrap_or_default();
    non_empty(first.trim())
}

/// `@lat,lng` in a Maps URL, as `"lat, lng"`.
pub(super) fn coordinates(url: &str) -> Option<String> {
    COORDINATES_REGEX
        .captures(url)
        .map(|caps| format!("{}, {}", &caps[1], &caps[2]))
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn rating_from_text<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> Option<f64> {
    STARS_REGEX
        .captures_iter(&ctx.body_text)
        .find_map(|caps| parse_rating(&caps[1]))
}

fn reviews_from_text<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> Option<u64> {
    REVIEWS_REGEX
        .captures(&ctx.body_text)
        .and_then(|caps| parse_count(&caps[1]))
}

/// `aria-label` values of every labelled element, lowercased.
fn aria_labels<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> Vec<String> {
    ctx.page
        .select_all(&ARIA_LABEL_SELECTOR)
        .into_iter()
        .filter_map(|el| el.value().attr("aria-label"))
        .map(|label| label.to_lowercase())
        .collect()
}

fn rating_from_labels<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> Option<f64> {
    aria_labels(ctx)
        .iter()
        .filter(|label| label.contains("star") || label.contains("rating"))
        .find_map(|label| {
            NUMBER_REGEX
                .find_iter(label)
                .map(|m| m.as_str())
                .filter(|token| SHORT_RATING_REGEX.is_match(token))
                .find_map(parse_rating)
        })
}

fn reviews_from_labels<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> Option<u64> {
    aria_labels(ctx)
        .iter()
        .filter(|label| label.contains("review"))
        .find_map(|label| {
            REVIEWS_REGEX
                .captures(label)
                .and_then(|caps| parse_count(&caps[1]))
                .or_else(|| {
                    NUMBER_REGEX
                        .find(label)
                        .and_then(|m| parse_count(m.as_str()))
                })
        })
}

fn short_texts<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> Vec<String> {
    ctx.page
        .select_all(&SHORT_TEXT_SELECTOR)
        .into_iter()
        .map(visible_text)
        .filter(|text| !text.is_empty() && text.len() <= 12)
        .collect()
}

fn rating_from_spans<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> Option<f64> {
    short_texts(ctx)
        .iter()
        .filter(|text| SHORT_RATING_REGEX.is_match(text))
        .find_map(|text| parse_rating(text))
}

fn reviews_from_spans<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> Option<u64> {
    short_texts(ctx).iter().find_map(|text| {
        SHORT_REVIEWS_REGEX
            .captures(text)
            .and_then(|caps| parse_count(&caps[1]))
    })
}

fn address_from_button<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> Option<String> {
    first_control_text(ctx, &MAPS_ADDRESS_SELECTOR)
}

fn address_from_label<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> Option<String> {
    labelled_value(ctx, "address")
}

fn phone_from_button<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> Option<String> {
    first_control_text(ctx, &MAPS_PHONE_SELECTOR)
}

fn phone_from_label<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> Option<String> {
    labelled_value(ctx, "phone")
}

fn first_control_text<P: PageAccessor>(
    ctx: &BusinessContext<'_, P>,
    selector: &scraper::Selector,
) -> Option<String> {
    ctx.page
        .select_all(selector)
        .into_iter()
        .map(visible_text)
        .find(|text| !text.is_empty())
}

/// Value of the first `aria-label="<key>: <value>"`.
fn labelled_value<P: PageAccessor>(ctx: &BusinessContext<'_, P>, key: &str) -> Option<String> {
    ctx.page
        .select_all(&ARIA_LABEL_SELECTOR)
        .into_iter()
        .filter_map(|el| el.value().attr("aria-label"))
        .filter_map(|label| label.split_once(':'))
        .filter(|(name, _)| name.trim().eq_ignore_ascii_case(key))
        .find_map(|(_, value)| non_empty(value.trim()))
}
