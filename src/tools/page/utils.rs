use scraper::{ElementRef, Node};

use crate::tools::clean::clean_text;

/// Elements whose text never renders.
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Elements that break lines when rendered, so their text never glues to a neighbour's.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr",
    "li", "main", "nav", "ol", "option", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Approximate `innerText`: rendered text only, whitespace collapsed and trimmed.
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut buf = String::new();
    push_visible_text(element, &mut buf);
    clean_text(&buf)
}

fn push_visible_text(element: ElementRef<'_>, buf: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => buf.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if HIDDEN_TAGS.contains(&name) || el.attr("hidden").is_some() {
                    continue;
                }
                let block = BLOCK_TAGS.contains(&name);
                if block {
                    buf.push(' ');
                }
                if let Some(child_ref) = ElementRef::wrap(child) {
                    push_visible_text(child_ref, buf);
                }
                if block {
                    buf.push(' ');
                }
            }
            _ => {}
        }
    }
}
