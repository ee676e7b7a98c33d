//! Link Filtering
//!
//! Narrows a cached link list for display. Predicates apply in a fixed order:
//! internal/external, follow/nofollow, navigation, search, then URL
//! de-duplication. Grouping by host is a presentation step on the result.
//! The input list is only ever borrowed.

mod tests;
mod types;
mod utils;

pub use types::*;
use utils::*;

use crate::types::LinkRecord;

/// Group name for links whose URL has no host.
pub const OTHER_GROUP: &str = "Other";

/// Apply `filter` to `links` and build the view shown to the user.
pub fn filter_links(links: &[LinkRecord], filter: &LinkFilter) -> LinkView {
    let kept = select_links(links, filter);
    log::debug!("link filter kept {} of {}", kept.len(), links.len());

    let groups = if filter.group_by_domain {
        group_by_domain(&kept, filter.show_full_list)
    } else {
        Vec::new()
    };

    LinkView {
        count: kept.len(),
        summary: summary_line(kept.len(), filter),
        items: if filter.show_full_list {
            kept.into_iter().cloned().collect()
        } else {
            Vec::new()
        },
        groups,
    }
}

/// The links that pass every predicate of `filter`, in input order.
pub fn select_links<'a>(links: &'a [LinkRecord], filter: &LinkFilter) -> Vec<&'a LinkRecord> {
    let search = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let narrowed = links
        .iter()
        .filter(|link| passes_scope(link, filter))
        .filter(|link| passes_follow(link, filter))
        .filter(|link| !(filter.hide_navigation && link.is_in_menu))
        .filter(|link| search.as_deref().map_or(true, |needle| matches_search(link, needle)));

    if filter.hide_duplicates {
        crate::dedupe_by!(narrowed, |link: &&LinkRecord| link.url.clone())
    } else {
        narrowed.collect()
    }
}
