use url::Url;

use super::{DomainGroup, LinkFilter, OTHER_GROUP};
use crate::types::LinkRecord;

pub(super) fn passes_scope(link: &LinkRecord, filter: &LinkFilter) -> bool {
    if link.is_internal {
        !filter.hide_internal
    } else {
        !filter.hide_external
    }
}

pub(super) fn passes_follow(link: &LinkRecord, filter: &LinkFilter) -> bool {
    if link.is_nofollow {
        filter.show_nofollow
    } else {
        filter.show_follow
    }
}

/// `needle` must already be lowercase.
pub(super) fn matches_search(link: &LinkRecord, needle: &str) -> bool {
    link.url.to_lowercase().contains(needle) || link.anchor.to_lowercase().contains(needle)
}

pub(super) fn domain_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| OTHER_GROUP.to_string())
}

pub(super) fn group_by_domain(links: &[&LinkRecord], with_items: bool) -> Vec<DomainGroup> {
    let mut groups: Vec<DomainGroup> = Vec::new();
    for link in links {
        let domain = domain_of(&link.url);
        let index = match groups.iter().position(|g| g.domain == domain) {
            Some(index) => index,
            None => {
                groups.push(DomainGroup {
                    domain,
                    ..Default::default()
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[index];
        group.count += 1;
        if with_items {
            group.items.push((*link).clone());
        }
    }
    groups
}

pub(super) fn summary_line(count: usize, filter: &LinkFilter) -> String {
    let notes = [
        (filter.hide_duplicates, " (duplicates hidden)"),
        (filter.hide_internal, " (internal links hidden)"),
        (filter.hide_external, " (external links hidden)"),
        (filter.hide_navigation, " (navigation links hidden)"),
    ];
    let mut line = format!("Showing {count} links");
    for (_, note) in notes.iter().filter(|(active, _)| *active) {
        line.push_str(note);
    }
    line
}
