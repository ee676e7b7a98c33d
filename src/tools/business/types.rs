use serde_json::Value;

use super::is_maps_url;
use crate::tools::page::PageAccessor;
use crate::tools::schema::schema_entities;
use crate::types::{BusinessFacts, SchemaRecord};

/// Schema.org types treated as a business.
pub const BUSINESS_TYPES: &[&str] = &["LocalBusiness", "Organization", "Hotel"];

/// Everything a business source may read.
pub struct BusinessContext<'a, P: PageAccessor> {
    pub page: &'a P,
    pub url: &'a str,
    pub title: &'a str,
    pub body_text: String,
    pub entities: Vec<Value>,
    pub is_maps: bool,
}

impl<'a, P: PageAccessor> BusinessContext<'a, P> {
    pub fn new(page: &'a P, title: &'a str, schema: &[SchemaRecord]) -> Self {
        Self {
            url: page.url(),
            is_maps: is_maps_url(page.url()),
            body_text: page.body_text(),
            entities: schema_entities(schema),
            page,
            title,
        }
    }
}

/// A source of business facts. Sources never fail; they return what they found.
pub type Source<P> = fn(&BusinessContext<'_, P>) -> BusinessFacts;

/// One way of finding a single field.
pub type Strategy<P, T> = fn(&BusinessContext<'_, P>) -> Option<T>;

/// Try strategies in order and keep the first value found.
pub fn first_success<P: PageAccessor, T>(
    ctx: &BusinessContext<'_, P>,
    strategies: &[Strategy<P, T>],
) -> Option<T> {
    strategies.iter().find_map(|strategy| strategy(ctx))
}
