#![cfg(test)]
mod tests {
    use crate::error::SeoscopeError;
    use crate::tools::fetch::utils::read_page;
    use crate::tools::fetch::*;
    use std::io::Write;
    use std::path::Path;

    #[tokio::test]
    async fn file_source_reads_markup_with_given_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<title>Local</title>").unwrap();

        let source = FileSource::new(file.path(), Some("https://example.com/page"));
        let page = source.load().await.unwrap();
        assert_eq!(page.html, "<title>Local</title>");
        assert_eq!(page.url, "https://example.com/page");
        assert_eq!(source.name(), "file");
    }

    #[tokio::test]
    async fn file_source_defaults_to_file_url() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let page = FileSource::new(file.path(), None).load().await.unwrap();
        assert!(page.url.starts_with("file:///"));
        assert!(page.html.is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let source = FileSource::new("/definitely/not/here.html", None);
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, SeoscopeError::Io(_)));
    }

    #[tokio::test]
    async fn reader_pages_keep_their_url() {
        let page = read_page(&b"<p>piped</p>"[..], STDIN_URL).await.unwrap();
        assert_eq!(page.html, "<p>piped</p>");
        assert_eq!(page.url, "about:blank");
    }

    #[test]
    fn http_source_requires_http_scheme() {
        assert!(HttpSource::new("https://example.com").is_ok());
        assert!(matches!(
            HttpSource::new("ftp://example.com/file"),
            Err(SeoscopeError::InvalidUrl(_))
        ));
        assert!(HttpSource::new("no scheme").is_err());
    }

    #[test]
    fn source_for_dispatches_on_input() {
        assert_eq!(source_for("-", None).unwrap().name(), "stdin");
        assert_eq!(source_for("https://example.com/", None).unwrap().name(), "http");
        assert_eq!(source_for("page.html", None).unwrap().name(), "file");
    }

    #[test]
    fn file_urls_are_absolute() {
        assert!(is_http_url(" http://example.com"));
        assert!(!is_http_url("example.com"));
        let url = file_url(Path::new("page.html"));
        assert!(url.starts_with("file:///"));
        assert!(url.ends_with("/page.html"));
    }
}
