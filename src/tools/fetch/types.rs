use serde::{Deserialize, Serialize};

/// Markup plus the URL it should be interpreted against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedPage {
    /// Final URL after redirects, or the URL assigned to local input.
    pub url: String,
    pub html: String,
}

/// HTTP(S) page retrieved with a single GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    pub(super) url: String,
}

/// Local HTML file.
#[derive(Debug, Clone)]
pub struct FileSource {
    pub(super) path: std::path::PathBuf,
    pub(super) url: String,
}

/// HTML piped on standard input.
#[derive(Debug, Clone)]
pub struct StdinSource {
    pub(super) url: String,
}
