use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ancestor levels searched when deciding whether a link sits in navigation.
pub const DEFAULT_NAV_DEPTH: usize = 5;

/// Options for a single extraction run.
///
/// # Examples
/// ```
/// use seoscope::tools::scrape::ExtractOptions;
///
/// let opts = ExtractOptions::new().with_business(false).with_nav_depth(3);
/// assert!(!opts.business);
/// assert!(opts.structured_data);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Run the local-business heuristics.
    pub business: bool,
    /// Parse JSON-LD, Microdata and RDFa.
    pub structured_data: bool,
    pub nav_depth: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            business: true,
            structured_data: true,
            nav_depth: DEFAULT_NAV_DEPTH,
        }
    }
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_business(mut self, enabled: bool) -> Self {
        self.business = enabled;
        self
    }

    pub fn with_structured_data(mut self, enabled: bool) -> Self {
        self.structured_data = enabled;
        self
    }

    pub fn with_nav_depth(mut self, depth: usize) -> Self {
        self.nav_depth = depth;
        self
    }
}

/// Result of the single pass over `<meta>` tags plus the canonical link.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MetaTags {
    pub description: String,
    pub keywords: String,
    pub robots: String,
    pub canonical: String,
    #[serde(default)]
    pub og_data: BTreeMap<String, String>,
    #[serde(default)]
    pub twitter_data: BTreeMap<String, String>,
}
