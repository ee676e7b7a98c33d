use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};
use url::Url;

use super::LoadedPage;
use crate::error::Result;

/// URL assigned to pages read from standard input without `--url`.
pub const STDIN_URL: &str = "about:blank";

pub fn is_http_url(input: &str) -> bool {
    let input = input.trim();
    input.starts_with("http://") || input.starts_with("https://")
}

/// `file://` URL for a local path, made absolute against the working directory.
pub fn file_url(path: &Path) -> String {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|dir| dir.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    Url::from_file_path(&absolute)
        .map(String::from)
        .unwrap_or_else(|_| format!("file:///{}", path.display()))
}

/// Read all markup from `reader` as the page at `url`.
pub(super) async fn read_page<R>(mut reader: R, url: &str) -> Result<LoadedPage>
where
    R: AsyncRead + Unpin,
{
    let mut html = String::new();
    reader.read_to_string(&mut html).await?;
    Ok(LoadedPage {
        url: url.to_string(),
        html,
    })
}
