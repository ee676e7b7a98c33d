#![cfg(test)]
mod tests {
    use crate::selectors::{ANCHOR_SELECTOR, HEADING_SELECTORS};
    use crate::tools::page::*;

    #[test]
    fn test_title_and_lang() {
        let html = r#"<html lang=" en-GB "><head><title>
            My   Page </title></head><body></body></html>"#;
        let page = HtmlPage::new("https://example.com/", html);
        assert_eq!(page.title(), "My Page");
        assert_eq!(page.lang(), "en-GB");
    }

    #[test]
    fn test_missing_title_and_lang_are_empty() {
        let page = HtmlPage::new("https://example.com/", "<p>hi</p>");
        assert_eq!(page.title(), "");
        assert_eq!(page.lang(), "");
    }

    #[test]
    fn test_hostname_from_url() {
        let page = HtmlPage::new("https://Shop.Example.com:8443/a?b=c", "");
        assert_eq!(page.hostname(), Some("shop.example.com"));

        let relative = HtmlPage::new("not a url", "");
        assert_eq!(relative.hostname(), None);
    }

    #[test]
    fn test_resolve_matches_browser_properties() {
        let page = HtmlPage::new("https://example.com/blog/post", "");
        assert_eq!(page.resolve("/about"), "https://example.com/about");
        assert_eq!(page.resolve("next"), "https://example.com/blog/next");
        assert_eq!(page.resolve("//cdn.example.net/x.png"), "https://cdn.example.net/x.png");
        assert_eq!(page.resolve("#top"), "https://example.com/blog/post#top");
        assert_eq!(page.resolve("mailto:a@b.com"), "mailto:a@b.com");
    }

    #[test]
    fn test_resolve_without_base_keeps_raw() {
        let page = HtmlPage::new("", "");
        assert_eq!(page.resolve(" /about "), "/about");
    }

    #[test]
    fn test_visible_text_skips_scripts_and_separates_blocks() {
        let html = r#"<body>
            <div>One</div><div>Two</div>
            <script>var hidden = 1;</script>
            <style>.x{}</style>
            <p>Three <b>bold</b>word</p>
            <span hidden>secret</span>
        </body>"#;
        let page = HtmlPage::new("https://example.com/", html);
        assert_eq!(page.body_text(), "One Two Three boldword");
    }

    #[test]
    fn test_select_all_in_document_order() {
        let html = "<h1>A</h1><a href='/1'>1</a><h1>B</h1><a>2</a>";
        let page = HtmlPage::new("https://example.com/", html);
        let headings: Vec<String> = page
            .select_all(&HEADING_SELECTORS[0])
            .into_iter()
            .map(visible_text)
            .collect();
        assert_eq!(headings, vec!["A", "B"]);
        assert_eq!(page.select_all(&ANCHOR_SELECTOR).len(), 2);
    }
}
