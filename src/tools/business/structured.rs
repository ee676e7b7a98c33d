use serde_json::Value;

use super::patterns::{kg_path, parse_count, parse_rating};
use super::types::{BusinessContext, BUSINESS_TYPES};
use crate::tools::page::PageAccessor;
use crate::tools::schema::{is_schema_type, schema_types};
use crate::types::BusinessFacts;

/// Postal address parts, in display order.
const ADDRESS_PARTS: &[&str] = &[
    "streetAddress",
    "addressLocality",
    "addressRegion",
    "postalCode",
    "addressCountry",
];

/// Facts from every business-typed Schema.org entity, earliest entity first.
pub(super) fn schema_facts<P: PageAccessor>(ctx: &BusinessContext<'_, P>) -> BusinessFacts {
    let mut facts = BusinessFacts::default();
    for entity in ctx
        .entities
        .iter()
        .filter(|entity| is_schema_type(entity, BUSINESS_TYPES))
    {
        facts.absorb(entity_facts(entity));
    }
    facts
}

pub(super) fn entity_facts(entity: &Value) -> BusinessFacts {
    let rating_source = entity
        .get("aggregateRating")
        .filter(|v| v.is_object())
        .unwrap_or(entity);

    let categories = schema_types(entity).join(", ");

    BusinessFacts {
        name: text_value(entity.get("name")),
        categories: (!categories.is_empty()).then_some(categories),
        address: entity.get("address").and_then(address_text),
        phone: text_value(entity.get("telephone")),
        coordinates: entity.get("geo").and_then(geo_text),
        kg_id: entity.get("sameAs").and_then(same_as_kg_id),
        rating: rating_source
            .get("ratingValue")
            .and_then(scalar_text)
            .and_then(|raw| parse_rating(&raw)),
        reviews: ["reviewCount", "ratingCount"]
            .iter()
            .filter_map(|key| rating_source.get(key))
            .filter_map(scalar_text)
            .find_map(|raw| parse_count(&raw)),
        ..Default::default()
    }
}

/// String or number as text; anything else is ignored.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn text_value(value: Option<&Value>) -> Option<String> {
    value
        .and_then(scalar_text)
        .filter(|text| !text.is_empty())
}

/// A plain string, a `PostalAddress` object, or a named `addressCountry` object.
fn address_text(address: &Value) -> Option<String> {
    match address {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Object(map) => {
            let parts: Vec<String> = ADDRESS_PARTS
                .iter()
                .filter_map(|key| map.get(*key))
                .filter_map(|part| match part {
                    Value::Object(inner) => inner.get("name").and_then(scalar_text),
                    other => scalar_text(other),
                })
                .filter(|part| !part.is_empty())
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Array(items) => items.iter().find_map(address_text),
        _ => None,
    }
}

fn geo_text(geo: &Value) -> Option<String> {
    let latitude = geo.get("latitude").and_then(scalar_text)?;
    let longitude = geo.get("longitude").and_then(scalar_text)?;
    Some(format!("{latitude}, {longitude}"))
}

fn same_as_kg_id(same_as: &Value) -> Option<String> {
    match same_as {
        Value::String(s) => kg_path(s),
        Value::Array(items) => items.iter().filter_map(Value::as_str).find_map(kg_path),
        _ => None,
    }
}
