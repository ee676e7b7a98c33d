use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

const DESKTOP_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

const HEADER_PAIRS: &[(&str, &str)] = &[
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
    ),
    ("accept-language", "en-US,en;q=0.9"),
];

/// Headers sent with every page request, User-Agent included.
pub(super) fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    for (k, v) in HEADER_PAIRS {
        if let (Ok(name), Ok(val)) = (
            HeaderName::from_bytes(k.as_bytes()),
            HeaderValue::from_str(v),
        ) {
            headers.insert(name, val);
        }
    }
    headers.insert(USER_AGENT, HeaderValue::from_static(DESKTOP_UA));

    headers
}
