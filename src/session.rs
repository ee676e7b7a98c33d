//! Presenter Session
//!
//! Holds the snapshot of one extraction. Filtering and exports borrow it;
//! nothing here ever changes the cached data.

use chrono::{DateTime, Utc};
use std::path::Path;

use crate::error::Result;
use crate::tools::export::{self, CopyPayload, ExportKind};
use crate::tools::fetch::{LoadedPage, PageSource};
use crate::tools::filter::{LinkFilter, LinkView};
use crate::tools::scrape::{extract_html, ExtractOptions};
use crate::types::PageSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    snapshot: PageSnapshot,
}

impl Session {
    pub fn new(snapshot: PageSnapshot) -> Self {
        Self { snapshot }
    }

    /// Extract a snapshot from already loaded markup.
    pub fn from_page(page: &LoadedPage, opts: &ExtractOptions) -> Self {
        Self::new(extract_html(&page.url, &page.html, opts))
    }

    /// Load once from `source`, then extract.
    pub async fn from_source(source: &dyn PageSource, opts: &ExtractOptions) -> Result<Self> {
        let page = source.load().await?;
        Ok(Self::from_page(&page, opts))
    }

    pub fn snapshot(&self) -> &PageSnapshot {
        &self.snapshot
    }

    pub fn filter_links(&self, filter: &LinkFilter) -> LinkView {
        crate::tools::filter::filter_links(&self.snapshot.links.items, filter)
    }

    pub fn render_export(
        &self,
        kind: ExportKind,
        filter: &LinkFilter,
        generated: DateTime<Utc>,
    ) -> Result<String> {
        export::render_export(&self.snapshot, kind, filter, generated)
    }

    /// Render `kind` and write it to `path`.
    pub fn export_to(&self, kind: ExportKind, filter: &LinkFilter, path: &Path) -> Result<()> {
        let contents = self.render_export(kind, filter, Utc::now())?;
        export::write_export(path, &contents)
    }

    pub fn payload(&self, payload: CopyPayload) -> Result<String> {
        export::render_payload(&self.snapshot, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::fetch::FileSource;

    const HTML: &str = r#"<title>Session</title>
        <a href="/a">A</a><a href="/a">A again</a><a href="https://x.org/">X</a>"#;

    fn session() -> Session {
        let page = LoadedPage {
            url: "https://example.com/".to_string(),
            html: HTML.to_string(),
        };
        Session::from_page(&page, &ExtractOptions::default())
    }

    #[test]
    fn test_filtering_leaves_snapshot_untouched() {
        let session = session();
        let before = session.snapshot().clone();
        let view = session.filter_links(&LinkFilter {
            hide_duplicates: true,
            hide_external: true,
            ..Default::default()
        });
        assert_eq!(view.count, 1);
        assert_eq!(view.summary, "Showing 1 links (duplicates hidden) (external links hidden)");
        assert_eq!(session.snapshot(), &before);
        assert_eq!(session.snapshot().links.total, 3);
    }

    #[test]
    fn test_export_to_writes_filtered_links() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.csv");
        let filter = LinkFilter {
            hide_internal: true,
            ..Default::default()
        };
        session().export_to(ExportKind::Links, &filter, &path).unwrap();
        let csv = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            csv,
            "Type,Anchor,URL,Follow,Navigation\n\"External\",\"X\",\"https://x.org/\",\"Follow\",\"No\"\n"
        );
    }

    #[test]
    fn test_payload_uses_cached_snapshot() {
        let meta = session().payload(CopyPayload::Meta).unwrap();
        assert!(meta.starts_with("Title: 7 characters | Session\n"));
    }

    #[tokio::test]
    async fn test_from_source_loads_once() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, HTML.as_bytes()).unwrap();
        let source = FileSource::new(file.path(), Some("https://example.com/"));
        let session = Session::from_source(&source, &ExtractOptions::default())
            .await
            .unwrap();
        assert_eq!(session.snapshot().title, "Session");
        assert_eq!(session.snapshot().links.internal, 2);
    }
}
