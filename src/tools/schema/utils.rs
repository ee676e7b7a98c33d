use scraper::{ElementRef, Selector};
use serde_json::{Map, Value};

use crate::selectors::{
    ITEMPROP_SELECTOR, ITEMSCOPE_SELECTOR, JSONLD_SELECTOR, PROPERTY_SELECTOR, TYPEOF_SELECTOR,
};
use crate::tools::page::{visible_text, PageAccessor};
use crate::types::{SchemaKind, SchemaRecord};

/// How a scope-based markup flavour names its scopes, types and properties.
pub(super) struct ScopeVocabulary {
    kind: SchemaKind,
    scope: &'static once_cell::sync::Lazy<Selector>,
    type_attr: &'static str,
    property: &'static once_cell::sync::Lazy<Selector>,
    property_attr: &'static str,
}

pub(super) static MICRODATA: ScopeVocabulary = ScopeVocabulary {
    kind: SchemaKind::Microdata,
    scope: &ITEMSCOPE_SELECTOR,
    type_attr: "itemtype",
    property: &ITEMPROP_SELECTOR,
    property_attr: "itemprop",
};

pub(super) static RDFA: ScopeVocabulary = ScopeVocabulary {
    kind: SchemaKind::Rdfa,
    scope: &TYPEOF_SELECTOR,
    type_attr: "typeof",
    property: &PROPERTY_SELECTOR,
    property_attr: "property",
};

pub(super) fn jsonld_records<P: PageAccessor>(page: &P) -> Vec<SchemaRecord> {
    page.select_all(&JSONLD_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let raw = el.text().collect::<String>();
            match serde_json::from_str::<Value>(raw.trim()) {
                Ok(data) => Some(SchemaRecord {
                    kind: SchemaKind::JsonLd,
                    item_type: None,
                    data,
                }),
                Err(e) => {
                    log::debug!("dropping malformed JSON-LD script: {e}");
                    None
                }
            }
        })
        .collect()
}

pub(super) fn scoped_records<P: PageAccessor>(
    page: &P,
    vocab: &ScopeVocabulary,
) -> Vec<SchemaRecord> {
    page.select_all(vocab.scope)
        .into_iter()
        .map(|scope| {
            let mut props = Map::new();
            for prop in scope.select(vocab.property) {
                if let Some(name) = prop.value().attr(vocab.property_attr) {
                    props.insert(name.to_string(), Value::String(property_value(page, prop)));
                }
            }
            SchemaRecord {
                kind: vocab.kind,
                item_type: Some(scope.value().attr(vocab.type_attr).unwrap_or("").to_string()),
                data: Value::Object(props),
            }
        })
        .collect()
}

/// Value of a property element: `content` on meta, `src` on images,
/// `href` (or text) on anchors, trimmed text otherwise.
fn property_value<P: PageAccessor>(page: &P, el: ElementRef<'_>) -> String {
    let node = el.value();
    match node.name() {
        "meta" => node.attr("content").unwrap_or("").trim().to_string(),
        "img" => node.attr("src").map(|s| page.resolve(s)).unwrap_or_default(),
        "a" => match node.attr("href") {
            Some(href) => page.resolve(href),
            None => visible_text(el),
        },
        _ => visible_text(el),
    }
}

/// Strip a schema.org vocabulary prefix: `https://schema.org/Hotel` → `Hotel`.
fn short_type(raw: &str) -> &str {
    let raw = raw.trim();
    raw.rsplit(['/', '#']).next().unwrap_or(raw)
}

/// Declared types of a JSON-LD entity, with vocabulary prefixes stripped.
pub fn schema_types(entity: &Value) -> Vec<&str> {
    match entity.get("@type") {
        Some(Value::String(s)) => vec![short_type(s)],
        Some(Value::Array(arr)) => arr.iter().filter_map(Value::as_str).map(short_type).collect(),
        _ => Vec::new(),
    }
}

/// Whether `entity` declares any of `wanted` (case-insensitive).
pub fn is_schema_type(entity: &Value, wanted: &[&str]) -> bool {
    schema_types(entity)
        .iter()
        .any(|t| wanted.iter().any(|w| t.eq_ignore_ascii_case(w)))
}

/// Entity objects across all records: JSON-LD arrays and `@graph` are expanded,
/// scope records become objects carrying their item type as `@type`.
pub fn schema_entities(records: &[SchemaRecord]) -> Vec<Value> {
    let mut entities = Vec::new();
    for record in records {
        match record.kind {
            SchemaKind::JsonLd => flatten_jsonld(&record.data, &mut entities),
            SchemaKind::Microdata | SchemaKind::Rdfa => {
                let mut data = record.data.clone();
                if let (Value::Object(map), Some(item_type)) = (&mut data, &record.item_type) {
                    // RDFa allows several space-separated types.
                    let types: Vec<Value> = item_type
                        .split_whitespace()
                        .map(|t| Value::String(t.to_string()))
                        .collect();
                    map.entry("@type").or_insert(Value::Array(types));
                }
                entities.push(data);
            }
        }
    }
    entities
}

fn flatten_jsonld(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(arr) => arr.iter().for_each(|v| flatten_jsonld(v, out)),
        Value::Object(obj) => match obj.get("@graph") {
            Some(graph @ Value::Array(_)) => flatten_jsonld(graph, out),
            _ => out.push(value.clone()),
        },
        _ => {}
    }
}
