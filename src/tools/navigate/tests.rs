#![cfg(test)]
mod tests {
    use crate::tools::navigate::*;

    #[test]
    fn test_origin_destinations() {
        let page = "https://shop.example.com:8443/a/b?q=1#frag";
        assert_eq!(
            robots_txt_url(page).unwrap(),
            "https://shop.example.com:8443/robots.txt"
        );
        assert_eq!(
            sitemap_url(page).unwrap(),
            "https://shop.example.com:8443/sitemap.xml"
        );
        assert_eq!(
            destination_url("http://example.com", Destination::Robots).unwrap(),
            "http://example.com/robots.txt"
        );
    }

    #[test]
    fn test_rich_results_encodes_page_url() {
        assert_eq!(
            rich_results_url("https://example.com/a?b=c&d=e"),
            "https://search.google.com/test/rich-results?url=https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc%26d%3De"
        );
    }

    #[test]
    fn test_pages_without_origin_are_rejected() {
        assert!(robots_txt_url("not a url").is_err());
        assert!(sitemap_url("file:///tmp/page.html").is_err());
        // The rich-results link only needs the text of the URL.
        assert!(destination_url("file:///tmp/page.html", Destination::RichResults).is_ok());
    }
}
