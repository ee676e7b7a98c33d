//! Page access.
//!
//! The extractor never touches a browser. It reads a document through the
//! [`PageAccessor`] capability, which [`HtmlPage`] implements on top of a
//! `scraper` DOM bound to the URL the markup was loaded from.

mod tests;
mod utils;

pub use utils::visible_text;

use crate::selectors::{BODY_SELECTOR, HTML_LANG_SELECTOR, META_SELECTOR, TITLE_SELECTOR};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Read-only view of a loaded document.
pub trait PageAccessor {
    /// The address the document was loaded from, as given.
    fn url(&self) -> &str;

    /// Host of the page URL, when it has one.
    fn hostname(&self) -> Option<&str>;

    /// The unmodified markup.
    fn raw_html(&self) -> &str;

    /// All elements matching `selector`, in document order.
    fn select_all<'a>(&'a self, selector: &Selector) -> Vec<ElementRef<'a>>;

    /// Resolve an attribute URL against the page, the way a browser's `href`/`src`
    /// properties do. Unresolvable values come back trimmed but otherwise untouched.
    fn resolve(&self, raw: &str) -> String;

    fn select_first<'a>(&'a self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.select_all(selector).into_iter().next()
    }

    /// Document title with whitespace collapsed.
    fn title(&self) -> String {
        self.select_first(&TITLE_SELECTOR)
            .map(visible_text)
            .unwrap_or_default()
    }

    /// Declared document language, empty when absent.
    fn lang(&self) -> String {
        self.select_first(&HTML_LANG_SELECTOR)
            .and_then(|el| el.value().attr("lang"))
            .map(|lang| lang.trim().to_string())
            .unwrap_or_default()
    }

    fn meta_tags<'a>(&'a self) -> Vec<ElementRef<'a>> {
        self.select_all(&META_SELECTOR)
    }

    /// Visible text of `<body>`.
    fn body_text(&self) -> String {
        self.select_first(&BODY_SELECTOR)
            .map(visible_text)
            .unwrap_or_default()
    }
}

/// A parsed HTML document plus the URL it belongs to.
pub struct HtmlPage {
    url: String,
    base: Option<Url>,
    raw: String,
    doc: Html,
}

impl HtmlPage {
    pub fn new(url: &str, html: &str) -> Self {
        let base = Url::parse(url.trim()).ok();
        if base.is_none() {
            log::debug!("page url {url:?} is not absolute, links stay unresolved");
        }
        Self {
            url: url.trim().to_string(),
            base,
            raw: html.to_string(),
            doc: Html::parse_document(html),
        }
    }
}

impl PageAccessor for HtmlPage {
    fn url(&self) -> &str {
        &self.url
    }

    fn hostname(&self) -> Option<&str> {
        self.base.as_ref().and_then(|u| u.host_str())
    }

    fn raw_html(&self) -> &str {
        &self.raw
    }

    fn select_all<'a>(&'a self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.doc.select(selector).collect()
    }

    fn resolve(&self, raw: &str) -> String {
        let raw = raw.trim();
        match &self.base {
            Some(base) => base
                .join(raw)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| raw.to_string()),
            None => raw.to_string(),
        }
    }
}
