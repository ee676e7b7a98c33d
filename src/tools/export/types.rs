use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A CSV file that can be written from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Links,
    Images,
    Hreflang,
    Report,
}

impl ExportKind {
    /// File name used when the caller does not choose one.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportKind::Links => "links_export.csv",
            ExportKind::Images => "images_export.csv",
            ExportKind::Hreflang => "hreflang_export.csv",
            ExportKind::Report => "seo_report.csv",
        }
    }
}

/// A plain-text payload meant for the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CopyPayload {
    Headings,
    Schema,
    Business,
    Embed,
    Meta,
}
