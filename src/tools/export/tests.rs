#![cfg(test)]
mod tests {
    use crate::tools::export::*;
    use crate::tools::filter::LinkFilter;
    use crate::tools::scrape::{extract_html, ExtractOptions};
    use crate::types::{BusinessFacts, HreflangRecord, ImageRecord, LinkRecord, PageSnapshot};
    use chrono::{TimeZone, Utc};

    const HTML: &str = r#"<html lang="en"><head>
        <title>Widgets</title>
        <meta name="description" content="Buy widgets">
        <meta property="og:title" content="OG Widgets">
        <link rel="alternate" hreflang="de" href="https://example.de/">
        <script type="application/ld+json">{"@type":"Product","name":"Widget"}</script>
    </head><body>
        <h1>Main</h1><h3>Sub "quoted"</h3>
        <nav><a href="/home">Home</a></nav>
        <a href="https://other.org/" rel="nofollow">He said "hi"</a>
        <img src="/a.png" alt="A">
    </body></html>"#;

    fn snapshot() -> PageSnapshot {
        extract_html("https://example.com/", HTML, &ExtractOptions::default())
    }

    #[test]
    fn test_links_csv_escapes_quotes() {
        let links = vec![LinkRecord {
            url: "https://example.com/q".to_string(),
            anchor: r#"He said "hi""#.to_string(),
            is_internal: true,
            is_nofollow: false,
            is_in_menu: false,
        }];
        let csv = links_csv(&links, &LinkFilter::default()).unwrap();
        assert_eq!(
            csv,
            "Type,Anchor,URL,Follow,Navigation\n\
             \"Internal\",\"He said \"\"hi\"\"\",\"https://example.com/q\",\"Follow\",\"No\"\n"
        );
    }

    #[test]
    fn test_links_csv_respects_filter() {
        let snapshot = snapshot();
        let filter = LinkFilter {
            hide_internal: true,
            ..Default::default()
        };
        let csv = links_csv(&snapshot.links.items, &filter).unwrap();
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].starts_with("\"External\",\"He said \"\"hi\"\"\""));
        assert!(rows[1].ends_with("\"NoFollow\",\"No\""));
    }

    #[test]
    fn test_images_and_hreflang_csv() {
        let images = vec![ImageRecord::new("/a.png", "A"), ImageRecord::new("/b.png", "")];
        assert_eq!(
            images_csv(&images).unwrap(),
            "Src,Alt,Has Alt\n\"/a.png\",\"A\",\"Yes\"\n\"/b.png\",\"\",\"No\"\n"
        );

        let hreflang = vec![HreflangRecord {
            lang: "en-gb".to_string(),
            href: "https://example.co.uk/".to_string(),
        }];
        assert_eq!(
            hreflang_csv(&hreflang).unwrap(),
            "Language,URL\n\"en-gb\",\"https://example.co.uk/\"\n"
        );
    }

    #[test]
    fn test_report_has_every_section_and_timestamp() {
        let generated = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let report = report_csv(&snapshot(), generated).unwrap();
        assert!(report.starts_with("\"SEO Report\"\n\"Generated\",\"2024-05-01T12:30:00Z\"\n"));
        for section in [
            "Overview",
            "Headings",
            "Links",
            "Images",
            "Hreflang",
            "Structured Data",
            "Business",
        ] {
            assert!(report.contains(&format!("\n\"{section}\"\n")), "missing {section}");
        }
        assert!(report.contains("\"H3\",\"Sub \"\"quoted\"\"\""));
        assert!(report.contains("\"Missing Alt\",\"0\""));
        assert!(report.contains("\"JSON-LD\",\"\",\"{"));
        assert!(report.contains("\"Phone\",\"Not available\""));
    }

    #[test]
    fn test_headings_text_skips_empty_levels() {
        let text = headings_text(&snapshot());
        assert_eq!(text, "H1 (1):\n- Main\n\nH3 (1):\n- Sub \"quoted\"\n\n");
    }

    #[test]
    fn test_schema_json_is_pretty_array() {
        let json = schema_json(&snapshot()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "Widget");
        assert!(json.contains('\n'));

        assert_eq!(schema_json(&PageSnapshot::default()).unwrap(), "[]");
    }

    #[test]
    fn test_business_text_and_embed_labels() {
        let facts = BusinessFacts {
            name: Some("Acme".to_string()),
            rating: Some(4.5),
            reviews: Some(12),
            ..Default::default()
        };
        let text = business_text(&facts);
        assert!(text.starts_with("Business Name: Acme\nCategories: Not available\n"));
        assert!(text.contains("Rating: 4.5\nReviews: 12\n"));
        assert_eq!(map_embed_text(&facts), "Not available");
    }

    #[test]
    fn test_meta_text_labels_missing_values() {
        let text = meta_text(&snapshot());
        assert!(text.starts_with("Title: 7 characters | Widgets\n"));
        assert!(text.contains("Description: 11 characters | Buy widgets\n"));
        assert!(text.contains("Canonical: Missing\n"));
        assert!(text.contains("Language: en\n"));
        assert!(text.contains("Open Graph:\n- title: OG Widgets\n"));
        assert!(text.contains("Twitter Card:\nNo Twitter Card tags found\n"));

        let empty = meta_text(&PageSnapshot::default());
        assert!(empty.contains("Title: Missing\n"));
        assert!(empty.contains("Language: Not specified\n"));
    }

    #[test]
    fn test_render_payload_dispatch() {
        let snapshot = snapshot();
        assert_eq!(
            render_payload(&snapshot, CopyPayload::Headings).unwrap(),
            headings_text(&snapshot)
        );
        assert_eq!(
            render_export(&snapshot, ExportKind::Hreflang, &LinkFilter::default(), Utc::now()).unwrap(),
            hreflang_csv(&snapshot.hreflang).unwrap()
        );
        assert_eq!(ExportKind::Links.default_file_name(), "links_export.csv");
    }

    #[test]
    fn test_write_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.csv");
        write_export(&path, "Type,Anchor,URL,Follow,Navigation\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Type,Anchor,URL,Follow,Navigation\n"
        );

        let missing = dir.path().join("no-such-dir").join("x.csv");
        assert!(write_export(&missing, "x").is_err());
    }
}
