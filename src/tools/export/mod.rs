//! Exports
//!
//! CSV files and clipboard text built from a [`PageSnapshot`]. CSV fields are
//! always quoted with embedded quotes doubled; missing values render as an
//! explicit label rather than an empty string.

mod tests;
mod types;
mod utils;

pub use types::*;
use utils::*;

use crate::error::Result;
use crate::tools::filter::{select_links, LinkFilter};
use crate::types::{BusinessFacts, HreflangRecord, ImageRecord, LinkRecord, PageSnapshot};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write as _;
use std::path::Path;

/// Links that pass `filter`, one row each.
pub fn links_csv(links: &[LinkRecord], filter: &LinkFilter) -> Result<String> {
    write_csv(
        Some(LINKS_HEADER),
        select_links(links, filter).into_iter().map(link_fields),
    )
}

pub fn images_csv(images: &[ImageRecord]) -> Result<String> {
    write_csv(
        Some(IMAGES_HEADER),
        images
            .iter()
            .map(|image| [image.src(), image.alt(), yes_no(image.has_alt())]),
    )
}

pub fn hreflang_csv(records: &[HreflangRecord]) -> Result<String> {
    write_csv(
        Some(HREFLANG_HEADER),
        records
            .iter()
            .map(|record| [record.lang.as_str(), record.href.as_str()]),
    )
}

/// Every section of the snapshot in one CSV document, sections separated by
/// a blank line.
pub fn report_csv(snapshot: &PageSnapshot, generated: DateTime<Utc>) -> Result<String> {
    let generated = generated.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut parts = vec![write_csv(
        None,
        [vec!["SEO Report"], vec!["Generated", generated.as_str()]],
    )?];

    let overview = overview_fields(snapshot);
    parts.push(
        section_title("Overview")?
            + &write_csv(
                None,
                overview.iter().map(|(label, value)| [*label, value.as_str()]),
            )?,
    );

    let heading_rows: Vec<[String; 2]> = snapshot
        .headings
        .iter()
        .flat_map(|(level, group)| {
            group
                .items
                .iter()
                .map(move |text| [level.to_uppercase(), text.clone()])
        })
        .collect();
    parts.push(section_title("Headings")? + &write_csv(Some(HEADINGS_HEADER), heading_rows)?);

    let links = &snapshot.links;
    let link_counts = [
        ("Total", links.total),
        ("Internal", links.internal),
        ("External", links.external),
        ("Follow", links.follow),
        ("NoFollow", links.nofollow),
    ]
    .map(|(label, count)| [label.to_string(), count.to_string()]);
    parts.push(
        section_title("Links")?
            + &write_csv(None, link_counts)?
            + &links_csv(&links.items, &LinkFilter::default())?,
    );

    let images = &snapshot.images;
    let image_counts = [("Total", images.total), ("Missing Alt", images.missing_alt)]
        .map(|(label, count)| [label.to_string(), count.to_string()]);
    parts.push(
        section_title("Images")? + &write_csv(None, image_counts)? + &images_csv(&images.items)?,
    );

    parts.push(section_title("Hreflang")? + &hreflang_csv(&snapshot.hreflang)?);

    let schema_rows = snapshot.schema.iter().map(|record| {
        [
            record.kind.label().to_string(),
            record.item_type.clone().unwrap_or_default(),
            record.data.to_string(),
        ]
    });
    parts.push(section_title("Structured Data")? + &write_csv(Some(SCHEMA_HEADER), schema_rows)?);

    let business_rows = business_fields(&snapshot.business)
        .into_iter()
        .map(|(label, value)| [label.to_string(), value.unwrap_or_else(|| NOT_AVAILABLE.to_string())]);
    parts.push(section_title("Business")? + &write_csv(None, business_rows)?);

    Ok(parts.join("\n"))
}

/// Render one CSV export. Only the links export honours `filter`.
pub fn render_export(
    snapshot: &PageSnapshot,
    kind: ExportKind,
    filter: &LinkFilter,
    generated: DateTime<Utc>,
) -> Result<String> {
    match kind {
        ExportKind::Links => links_csv(&snapshot.links.items, filter),
        ExportKind::Images => images_csv(&snapshot.images.items),
        ExportKind::Hreflang => hreflang_csv(&snapshot.hreflang),
        ExportKind::Report => report_csv(snapshot, generated),
    }
}

/// Headings grouped by level: `H<n> (<count>):`, one `- text` line each.
pub fn headings_text(snapshot: &PageSnapshot) -> String {
    let mut text = String::new();
    for (level, group) in &snapshot.headings {
        if group.items.is_empty() {
            continue;
        }
        let _ = writeln!(text, "{} ({}):", level.to_uppercase(), group.items.len());
        for item in &group.items {
            let _ = writeln!(text, "- {item}");
        }
        text.push('\n');
    }
    text
}

/// Data of every structured-data record as a pretty JSON array.
pub fn schema_json(snapshot: &PageSnapshot) -> Result<String> {
    let data: Vec<_> = snapshot.schema.iter().map(|record| &record.data).collect();
    Ok(serde_json::to_string_pretty(&data)?)
}

pub fn business_text(facts: &BusinessFacts) -> String {
    business_fields(facts)
        .into_iter()
        .map(|(label, value)| format!("{label}: {}\n", value.as_deref().unwrap_or(NOT_AVAILABLE)))
        .collect()
}

pub fn map_embed_text(facts: &BusinessFacts) -> String {
    facts
        .map_embed
        .clone()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Overview fields plus Open Graph and Twitter Card tags.
pub fn meta_text(snapshot: &PageSnapshot) -> String {
    let mut text = String::new();
    for (label, value) in overview_fields(snapshot) {
        let _ = writeln!(text, "{label}: {value}");
    }

    for (heading, tags, empty) in [
        ("Open Graph", &snapshot.og_data, "No Open Graph tags found"),
        ("Twitter Card", &snapshot.twitter_data, "No Twitter Card tags found"),
    ] {
        let _ = writeln!(text, "\n{heading}:");
        if tags.is_empty() {
            let _ = writeln!(text, "{empty}");
        }
        for (key, value) in tags {
            let _ = writeln!(text, "- {key}: {value}");
        }
    }
    text
}

/// Render one clipboard payload.
pub fn render_payload(snapshot: &PageSnapshot, payload: CopyPayload) -> Result<String> {
    Ok(match payload {
        CopyPayload::Headings => headings_text(snapshot),
        CopyPayload::Schema => schema_json(snapshot)?,
        CopyPayload::Business => business_text(&snapshot.business),
        CopyPayload::Embed => map_embed_text(&snapshot.business),
        CopyPayload::Meta => meta_text(snapshot),
    })
}

/// Write an export to disk. Failures are logged and returned, never retried.
pub fn write_export(path: &Path, contents: &str) -> Result<()> {
    match std::fs::write(path, contents) {
        Ok(()) => {
            log::info!("wrote {} bytes to {}", contents.len(), path.display());
            Ok(())
        }
        Err(e) => {
            log::warn!("could not write {}: {e}", path.display());
            Err(e.into())
        }
    }
}

fn overview_fields(snapshot: &PageSnapshot) -> Vec<(&'static str, String)> {
    let with_length = |value: &str| {
        if value.is_empty() {
            MISSING.to_string()
        } else {
            format!("{} characters | {value}", value.chars().count())
        }
    };

    vec![
        ("Title", with_length(snapshot.title.as_str())),
        ("Description", with_length(snapshot.description.as_str())),
        ("URL", snapshot.url.clone()),
        ("Canonical", or_label(&snapshot.canonical, MISSING).to_string()),
        ("Robots", or_label(&snapshot.robots, MISSING).to_string()),
        ("Keywords", or_label(&snapshot.keywords, MISSING).to_string()),
        ("Word Count", snapshot.word_count.to_string()),
        ("Language", or_label(&snapshot.lang, NOT_SPECIFIED).to_string()),
    ]
}
