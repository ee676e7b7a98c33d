use once_cell::sync::Lazy;
use regex::Regex;

use super::types::BusinessContext;
use crate::selectors::KG_ATTR_SELECTOR;
use crate::tools::page::PageAccessor;
use crate::types::BusinessFacts;

/// Ratings live on a five-point scale.
const MAX_RATING: f64 = 5.0;

/// Attributes that carry an explicit knowledge-graph id, in priority order.
const KG_ATTRIBUTES: &[&str] = &["data-kg-id", "data-google-id", "data-entity-id"];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("valid regex"))
        .collect()
}

/// `"4.5 stars"`.
pub(super) static STARS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d(?:\.\d+)?)\s*stars?\b").expect("valid regex"));

/// `"636 reviews"`, `"1,204 Google reviews"`.
pub(super) static REVIEWS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d[\d,]*)\s*(?:google\s+|customer\s+)?reviews?\b").expect("valid regex")
});

static KG_PATH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/g/[a-zA-Z0-9_]+").expect("valid regex"));

/// Rating and review count in one phrase. The first group that takes part is
/// the rating, the last one the count.
static COMBINED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(\d(?:\.\d+)?)\s*stars?\s*[(\[]?\s*(\d[\d,]*)\s*reviews?",
        r"(?:(?:rating|rated)[:\s]+(\d\.\d)\s*(?:★+|stars?)?|(\d\.\d)\s*(?:★+|stars?))\s*\((\d[\d,]*)\)",
        r"rated\s+(\d(?:\.\d+)?)(?:\s*(?:/|out of)\s*5)?\D{0,40}?(\d[\d,]*)\s*(?:reviews?|ratings?)",
        r"(\d(?:\.\d+)?)\s*out of\s*5\D{0,40}?(\d[\d,]*)\s*(?:reviews?|ratings?)",
        r"(\d(?:\.\d+)?)\s*/\s*5\D{0,40}?(\d[\d,]*)\s*(?:reviews?|ratings?)",
    ])
});

static RATING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(\d(?:\.\d+)?)\s*(?:/|out of)\s*5\b",
        r"(\d(?:\.\d+)?)\s*stars?\b",
        r"rating[:\s]+(\d(?:\.\d+)?)",
    ])
});

static REVIEW_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(\d[\d,]*)\s*(?:google\s+|customer\s+)?reviews?\b",
        r"(\d[\d,]*)\s*ratings?\b",
        r"reviews?[:\s]+\(?(\d[\d,]*)\)?",
    ])
});

/// A rating between 0 and 5, accepting a decimal comma.
pub(super) fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|rating| (0.0..=MAX_RATING).contains(rating))
}

/// A count with optional thousands separators.
pub(super) fn parse_count(raw: &str) -> Option<u64> {
    raw.trim().replace(',', "").parse().ok()
}

fn combined_match(re: &Regex, text: &str) -> Option<(f64, u64)> {
    re.captures_iter(text).find_map(|caps| {
        let groups: Vec<&str> = caps.iter().skip(1).flatten().map(|m| m.as_str()).collect();
        match groups.as_slice() {
            [rating, .., count] => Some((parse_rating(rating)?, parse_count(count)?)),
            _ => None,
        }
    })
}

fn rating_match(re: &Regex, text: &str) -> Option<f64> {
    re.captures_iter(text).find_map(|caps| parse_rating(&caps[1]))
}

fn count_match(re: &Regex, text: &str) -> Option<u64> {
    re.captures(text).and_then(|caps| parse_count(&caps[1]))
}

/// Rating and review count from free text: combined phrases first,
/// then standalone ratings and standalone counts.
pub(super) fn text_facts(text: &str) -> BusinessFacts {
    let mut facts = BusinessFacts::default();

    if let Some((rating, reviews)) = COMBINED_PATTERNS.iter().find_map(|re| combined_match(re, text)) {
        facts.rating = Some(rating);
        facts.reviews = Some(reviews);
    }
    if facts.rating.is_none() {
        facts.rating = RATING_PATTERNS.iter().find_map(|re| rating_match(re, text));
    }
    if facts.reviews.is_none() {
        facts.reviews = REVIEW_PATTERNS.iter().find_map(|re| count_match(re, text));
    }

    facts
}

pub(super) fn pattern_facts<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> BusinessFacts {
    text_facts(&ctx.body_text)
}

/// Knowledge-graph id from explicit attributes, else the first `/g/…` in the markup.
pub(super) fn kg_facts<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> BusinessFacts {
    let from_attributes = ctx
        .page
        .select_all(&KG_ATTR_SELECTOR)
        .into_iter()
        .find_map(|el| {
            KG_ATTRIBUTES
                .iter()
                .filter_map(|attr| el.value().attr(attr))
                .map(str::trim)
                .find(|id| !id.is_empty())
                .map(str::to_string)
        });

    BusinessFacts {
        kg_id: from_attributes.or_else(|| kg_path(ctx.page.raw_html())),
        ..Default::default()
    }
}

/// First `/g/<id>` path segment in `text`.
pub(super) fn kg_path(text: &str) -> Option<String> {
    KG_PATH_REGEX.find(text).map(|m| m.as_str().to_string())
}
