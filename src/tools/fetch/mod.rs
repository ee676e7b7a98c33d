//! Page Retrieval
//!
//! One request, one response. A [`PageSource`] loads markup once and reports
//! the URL it belongs to; nothing is retried and nothing is cached.

mod client;
mod headers;
mod tests;
mod utils;

pub mod types;

pub use types::*;
pub use utils::{file_url, is_http_url, STDIN_URL};

use crate::error::{Result, SeoscopeError};
use async_trait::async_trait;
use std::path::PathBuf;
use url::Url;

/// Something a page can be loaded from.
#[async_trait]
pub trait PageSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn load(&self) -> Result<LoadedPage>;
}

impl HttpSource {
    /// Only `http` and `https` URLs are accepted.
    pub fn new(url: &str) -> Result<Self> {
        let parsed = Url::parse(url.trim())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SeoscopeError::InvalidUrl(format!(
                "{url} is not an http(s) URL"
            )));
        }
        Ok(Self {
            url: parsed.to_string(),
        })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn load(&self) -> Result<LoadedPage> {
        log::info!("fetching {}", self.url);
        let client = client::build_client()?;

        let resp = client.get(&self.url).send().await?;
        let status = resp.status();
        let final_url = resp.url().to_string();
        if !status.is_success() {
            return Err(SeoscopeError::fetch_error(
                &self.url,
                format!("HTTP status {status}"),
            ));
        }

        let html = resp.text().await?;
        log::info!("fetched {} bytes from {final_url}", html.len());
        Ok(LoadedPage {
            url: final_url,
            html,
        })
    }
}

impl FileSource {
    /// `url` defaults to the file's own `file://` URL.
    pub fn new(path: impl Into<PathBuf>, url: Option<&str>) -> Self {
        let path = path.into();
        let url = url.map(str::to_string).unwrap_or_else(|| file_url(&path));
        Self { path, url }
    }
}

#[async_trait]
impl PageSource for FileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn load(&self) -> Result<LoadedPage> {
        log::info!("reading {}", self.path.display());
        let html = tokio::fs::read_to_string(&self.path).await?;
        Ok(LoadedPage {
            url: self.url.clone(),
            html,
        })
    }
}

impl StdinSource {
    pub fn new(url: Option<&str>) -> Self {
        Self {
            url: url.unwrap_or(STDIN_URL).to_string(),
        }
    }
}

#[async_trait]
impl PageSource for StdinSource {
    fn name(&self) -> &'static str {
        "stdin"
    }

    async fn load(&self) -> Result<LoadedPage> {
        utils::read_page(tokio::io::stdin(), &self.url).await
    }
}

/// Pick a source for a CLI input: `-` is stdin, http(s) URLs are fetched,
/// anything else is a file path. `url` overrides the page URL of local input.
pub fn source_for(input: &str, url: Option<&str>) -> Result<Box<dyn PageSource>> {
    let source: Box<dyn PageSource> = match input.trim() {
        "-" => Box::new(StdinSource::new(url)),
        remote if is_http_url(remote) => Box::new(HttpSource::new(remote)?),
        path => Box::new(FileSource::new(path, url)),
    };
    log::debug!("using {} source for {input}", source.name());
    Ok(source)
}
