use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Heading levels in document order of importance.
pub const HEADING_LEVELS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Everything extracted from one page view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub title: String,
    pub url: String,
    pub lang: String,
    pub description: String,
    pub keywords: String,
    pub robots: String,
    pub canonical: String,
    pub og_data: BTreeMap<String, String>,
    pub twitter_data: BTreeMap<String, String>,
    pub word_count: usize,
    pub headings: BTreeMap<String, HeadingGroup>,
    pub links: LinkSummary,
    pub images: ImageSummary,
    pub schema: Vec<SchemaRecord>,
    pub hreflang: Vec<HreflangRecord>,
    pub content: ContentSummary,
    pub business: BusinessFacts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HeadingGroup {
    pub count: usize,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LinkSummary {
    pub total: usize,
    pub internal: usize,
    pub external: usize,
    pub follow: usize,
    pub nofollow: usize,
    pub items: Vec<LinkRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub url: String,
    pub anchor: String,
    pub is_internal: bool,
    pub is_nofollow: bool,
    pub is_in_menu: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ImageSummary {
    pub total: usize,
    pub missing_alt: usize,
    pub items: Vec<ImageRecord>,
}

/// An `<img>` element. `has_alt` always mirrors whether `alt` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawImageRecord", rename_all = "camelCase")]
pub struct ImageRecord {
    src: String,
    alt: String,
    has_alt: bool,
}

#[derive(Deserialize)]
struct RawImageRecord {
    #[serde(default)]
    src: String,
    #[serde(default)]
    alt: String,
}

impl From<RawImageRecord> for ImageRecord {
    fn from(raw: RawImageRecord) -> Self {
        ImageRecord::new(raw.src, raw.alt)
    }
}

impl ImageRecord {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        let alt = alt.into();
        Self {
            src: src.into(),
            has_alt: !alt.is_empty(),
            alt,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn has_alt(&self) -> bool {
        self.has_alt
    }
}

/// Which markup flavour a structured-data record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaKind {
    #[serde(rename = "JSON-LD")]
    JsonLd,
    Microdata,
    #[serde(rename = "RDFa")]
    Rdfa,
}

impl SchemaKind {
    pub fn label(&self) -> &'static str {
        match self {
            SchemaKind::JsonLd => "JSON-LD",
            SchemaKind::Microdata => "Microdata",
            SchemaKind::Rdfa => "RDFa",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaRecord {
    #[serde(rename = "type")]
    pub kind: SchemaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HreflangRecord {
    pub lang: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContentSummary {
    pub main_content: String,
    pub article_content: String,
    pub paragraphs: Vec<String>,
}

/// Best-effort facts about a local business. Every field may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BusinessFacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kg_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_embed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl BusinessFacts {
    /// Fill every field that is still absent from `other`. Fields already set win.
    pub fn absorb(&mut self, other: BusinessFacts) {
        fn fill<T>(slot: &mut Option<T>, value: Option<T>) {
            if slot.is_none() {
                *slot = value;
            }
        }
        fill(&mut self.name, other.name);
        fill(&mut self.categories, other.categories);
        fill(&mut self.address, other.address);
        fill(&mut self.phone, other.phone);
        fill(&mut self.coordinates, other.coordinates);
        fill(&mut self.kg_id, other.kg_id);
        fill(&mut self.map_embed, other.map_embed);
        fill(&mut self.reviews, other.reviews);
        fill(&mut self.rating, other.rating);
    }

    pub fn is_empty(&self) -> bool {
        *self == BusinessFacts::default()
    }
}

/// Envelope printed by the CLI for machine-readable output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
