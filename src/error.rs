use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeoscopeError>;

#[derive(Debug, Error)]
pub enum SeoscopeError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

impl SeoscopeError {
    pub fn fetch_error(url: &str, reason: impl Into<String>) -> Self {
        SeoscopeError::Fetch {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<reqwest::Error> for SeoscopeError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        SeoscopeError::Fetch {
            url,
            reason: e.to_string(),
        }
    }
}

impl From<url::ParseError> for SeoscopeError {
    fn from(e: url::ParseError) -> Self {
        SeoscopeError::InvalidUrl(e.to_string())
    }
}
