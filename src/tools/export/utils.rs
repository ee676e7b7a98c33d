use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{Result, SeoscopeError};
use crate::types::{BusinessFacts, LinkRecord};

pub(super) const MISSING: &str = "Missing";
pub(super) const NOT_AVAILABLE: &str = "Not available";
pub(super) const NOT_SPECIFIED: &str = "Not specified";

pub(super) const LINKS_HEADER: &str = "Type,Anchor,URL,Follow,Navigation";
pub(super) const IMAGES_HEADER: &str = "Src,Alt,Has Alt";
pub(super) const HREFLANG_HEADER: &str = "Language,URL";
pub(super) const HEADINGS_HEADER: &str = "Level,Text";
pub(super) const SCHEMA_HEADER: &str = "Type,Item Type,Data";

/// Rows with every field quoted, after an optional bare header line.
pub(super) fn write_csv<I, R, F>(header: Option<&str>, rows: I) -> Result<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let mut buf = Vec::new();
    if let Some(header) = header {
        buf.extend_from_slice(header.as_bytes());
        buf.push(b'\n');
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(buf);
    for row in rows {
        writer.write_record(row)?;
    }

    let buf = writer
        .into_inner()
        .map_err(|e| SeoscopeError::Other(format!("csv flush failed: {e}")))?;
    String::from_utf8(buf).map_err(|e| SeoscopeError::Other(format!("csv is not utf-8: {e}")))
}

/// Single-field line naming a report section.
pub(super) fn section_title(title: &str) -> Result<String> {
    write_csv(None, [[title]])
}

pub(super) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

pub(super) fn or_label<'a>(value: &'a str, label: &'a str) -> &'a str {
    if value.trim().is_empty() {
        label
    } else {
        value
    }
}

pub(super) fn link_fields(link: &LinkRecord) -> [&str; 5] {
    [
        if link.is_internal { "Internal" } else { "External" },
        link.anchor.as_str(),
        link.url.as_str(),
        if link.is_nofollow { "NoFollow" } else { "Follow" },
        yes_no(link.is_in_menu),
    ]
}

/// Business fields as `(label, value)` pairs, in display order.
pub(super) fn business_fields(facts: &BusinessFacts) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("Business Name", facts.name.clone()),
        ("Categories", facts.categories.clone()),
        ("Address", facts.address.clone()),
        ("Phone", facts.phone.clone()),
        ("Rating", facts.rating.map(|r| r.to_string())),
        ("Reviews", facts.reviews.map(|r| r.to_string())),
        ("Coordinates", facts.coordinates.clone()),
        ("Knowledge Graph ID", facts.kg_id.clone()),
    ]
}
