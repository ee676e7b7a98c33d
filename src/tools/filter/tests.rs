#![cfg(test)]
mod tests {
    use crate::tools::filter::*;
    use crate::types::LinkRecord;

    fn link(url: &str, anchor: &str, internal: bool, nofollow: bool, menu: bool) -> LinkRecord {
        LinkRecord {
            url: url.to_string(),
            anchor: anchor.to_string(),
            is_internal: internal,
            is_nofollow: nofollow,
            is_in_menu: menu,
        }
    }

    fn sample() -> Vec<LinkRecord> {
        vec![
            link("https://example.com/", "Home", true, false, true),
            link("https://example.com/", "Logo", true, false, false),
            link("https://other.org/a", "Partner", false, true, false),
            link("https://cdn.net/file", "Download PDF", false, false, false),
            link("mailto:hi@example.com", "Mail us", false, false, false),
            link("", "No anchor text", false, false, false),
        ]
    }

    fn urls(view: &LinkView) -> Vec<&str> {
        view.items.iter().map(|l| l.url.as_str()).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let links = sample();
        let view = filter_links(&links, &LinkFilter::default());
        assert_eq!(view.count, 6);
        assert_eq!(view.items, links);
        assert_eq!(view.summary, "Showing 6 links");
        assert!(view.groups.is_empty());
    }

    #[test]
    fn test_hide_duplicates_keeps_first_occurrence() {
        let links = sample();
        let filter = LinkFilter {
            hide_duplicates: true,
            ..Default::default()
        };
        let view = filter_links(&links, &filter);
        assert_eq!(view.count, 5);
        assert_eq!(view.items[0].anchor, "Home");
        assert!(view.items.iter().all(|l| l.anchor != "Logo"));
        assert_eq!(view.summary, "Showing 5 links (duplicates hidden)");
        // Cached list untouched.
        assert_eq!(links.len(), 6);
        assert_eq!(links[1].anchor, "Logo");
    }

    #[test]
    fn test_scope_and_follow_toggles() {
        let links = sample();
        let no_internal = LinkFilter {
            hide_internal: true,
            ..Default::default()
        };
        let view = filter_links(&links, &no_internal);
        assert_eq!(view.count, 4);
        assert_eq!(view.summary, "Showing 4 links (internal links hidden)");

        let no_external = LinkFilter {
            hide_external: true,
            ..Default::default()
        };
        assert_eq!(
            urls(&filter_links(&links, &no_external)),
            vec!["https://example.com/", "https://example.com/"]
        );

        let only_nofollow = LinkFilter {
            show_follow: false,
            ..Default::default()
        };
        assert_eq!(urls(&filter_links(&links, &only_nofollow)), vec!["https://other.org/a"]);

        let nothing = LinkFilter {
            show_follow: false,
            show_nofollow: false,
            ..Default::default()
        };
        assert_eq!(filter_links(&links, &nothing).count, 0);
    }

    #[test]
    fn test_navigation_and_search() {
        let links = sample();
        let filter = LinkFilter {
            hide_navigation: true,
            search: Some("  PDF ".to_string()),
            ..Default::default()
        };
        let view = filter_links(&links, &filter);
        assert_eq!(urls(&view), vec!["https://cdn.net/file"]);
        assert_eq!(view.summary, "Showing 1 links (navigation links hidden)");

        let by_url = LinkFilter {
            search: Some("EXAMPLE.COM".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_links(&links, &by_url).count, 3);

        let blank = LinkFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_links(&links, &blank).count, 6);
    }

    #[test]
    fn test_dedupe_runs_after_other_predicates() {
        let links = vec![
            link("https://example.com/x", "In menu", true, false, true),
            link("https://example.com/x", "In body", true, false, false),
        ];
        let filter = LinkFilter {
            hide_navigation: true,
            hide_duplicates: true,
            ..Default::default()
        };
        let view = filter_links(&links, &filter);
        assert_eq!(view.count, 1);
        assert_eq!(view.items[0].anchor, "In body");
    }

    #[test]
    fn test_grouping_by_domain() {
        let links = sample();
        let filter = LinkFilter {
            group_by_domain: true,
            ..Default::default()
        };
        let view = filter_links(&links, &filter);
        let domains: Vec<(&str, usize)> = view
            .groups
            .iter()
            .map(|g| (g.domain.as_str(), g.count))
            .collect();
        assert_eq!(
            domains,
            vec![("example.com", 2), ("other.org", 1), ("cdn.net", 1), (OTHER_GROUP, 2)]
        );
        assert_eq!(view.groups[0].items.len(), 2);

        let collapsed = LinkFilter {
            group_by_domain: true,
            show_full_list: false,
            ..Default::default()
        };
        let view = filter_links(&links, &collapsed);
        assert_eq!(view.count, 6);
        assert!(view.items.is_empty());
        assert_eq!(view.groups.len(), 4);
        assert!(view.groups.iter().all(|g| g.items.is_empty()));
    }

    #[test]
    fn test_filter_deserializes_with_defaults() {
        let filter: LinkFilter = serde_json::from_str(r#"{"hideInternal": true}"#).unwrap();
        assert!(filter.hide_internal);
        assert!(filter.show_follow);
        assert!(filter.show_full_list);
        assert_eq!(filter.search, None);
    }
}
