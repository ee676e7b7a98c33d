//! Destinations derived from the page URL.

mod tests;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use url::{form_urlencoded, Url};

use crate::error::{Result, SeoscopeError};

const RICH_RESULTS_BASE: &str = "https://search.google.com/test/rich-results";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    Robots,
    Sitemap,
    RichResults,
}

/// URL of `destination` for the page at `page_url`.
pub fn destination_url(page_url: &str, destination: Destination) -> Result<String> {
    match destination {
        Destination::Robots => robots_txt_url(page_url),
        Destination::Sitemap => sitemap_url(page_url),
        Destination::RichResults => Ok(rich_results_url(page_url)),
    }
}

/// `/robots.txt` at the page origin.
///
/// # Examples
/// ```
/// use seoscope::tools::navigate::robots_txt_url;
///
/// let url = robots_txt_url("https://example.com/blog/post?x=1").unwrap();
/// assert_eq!(url, "https://example.com/robots.txt");
/// ```
pub fn robots_txt_url(page_url: &str) -> Result<String> {
    at_origin(page_url, "/robots.txt")
}

/// `/sitemap.xml` at the page origin.
pub fn sitemap_url(page_url: &str) -> Result<String> {
    at_origin(page_url, "/sitemap.xml")
}

/// Rich-results test for the page, with the page URL as the `url` parameter.
pub fn rich_results_url(page_url: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("url", page_url)
        .finish();
    format!("{RICH_RESULTS_BASE}?{query}")
}

fn at_origin(page_url: &str, path: &str) -> Result<String> {
    let url = Url::parse(page_url.trim())?;
    let origin = url.origin();
    if !origin.is_tuple() {
        return Err(SeoscopeError::InvalidUrl(format!(
            "{page_url} has no web origin"
        )));
    }
    Ok(format!("{}{path}", origin.ascii_serialization()))
}
