use super::headers::default_headers;
use crate::error::Result;
use reqwest::{redirect, Client};
use std::time::Duration;

const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const REDIRECT_LIMIT: usize = 10;

/// Client for one-shot page retrieval.
pub(super) fn build_client() -> Result<Client> {
    let client = Client::builder()
        .cookie_store(true)
        .default_headers(default_headers())
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(Duration::from_millis(DEFAULT_TIMEOUT_MS))
        .build()?;
    Ok(client)
}
