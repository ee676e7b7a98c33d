use serde::{Deserialize, Serialize};

use crate::types::LinkRecord;

/// Toggles applied to a cached link list.
///
/// # Examples
/// ```
/// use seoscope::tools::filter::LinkFilter;
///
/// let filter = LinkFilter::default();
/// assert!(filter.show_follow && filter.show_nofollow && filter.show_full_list);
/// assert!(!filter.hide_duplicates);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkFilter {
    pub hide_duplicates: bool,
    pub hide_internal: bool,
    pub hide_external: bool,
    pub show_follow: bool,
    pub show_nofollow: bool,
    pub hide_navigation: bool,
    pub group_by_domain: bool,
    pub show_full_list: bool,
    /// Case-insensitive substring matched against URL and anchor.
    pub search: Option<String>,
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self {
            hide_duplicates: false,
            hide_internal: false,
            hide_external: false,
            show_follow: true,
            show_nofollow: true,
            hide_navigation: false,
            group_by_domain: false,
            show_full_list: true,
            search: None,
        }
    }
}

/// Filtered, optionally grouped, view of the links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LinkView {
    /// Links left after filtering.
    pub count: usize,
    /// `Showing <n> links` plus a note per active hiding toggle.
    pub summary: String,
    /// Filtered links; empty unless the full list was requested.
    pub items: Vec<LinkRecord>,
    /// Per-host groups in first-seen order; empty unless grouping was requested.
    pub groups: Vec<DomainGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DomainGroup {
    pub domain: String,
    pub count: usize,
    pub items: Vec<LinkRecord>,
}
