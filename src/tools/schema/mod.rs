//! Structured Data
//!
//! Three independent strategies run over the whole document and are appended in
//! a fixed order: JSON-LD, then Microdata, then RDFa, each in document order.

mod utils;

pub use utils::{is_schema_type, schema_entities, schema_types};
use utils::*;

use crate::tools::page::PageAccessor;
use crate::types::SchemaRecord;

/// Scrape every structured-data record from the page.
pub fn scrape_schema<P: PageAccessor>(page: &P) -> Vec<SchemaRecord> {
    crate::merge!(
        scrape_jsonld(page),
        scrape_microdata(page),
        scrape_rdfa(page)
    )
}

/// One record per `<script type="application/ld+json">` that parses as JSON.
/// Scripts that fail to parse are dropped.
pub fn scrape_jsonld<P: PageAccessor>(page: &P) -> Vec<SchemaRecord> {
    jsonld_records(page)
}

/// One record per `[itemscope]` element.
pub fn scrape_microdata<P: PageAccessor>(page: &P) -> Vec<SchemaRecord> {
    scoped_records(page, &MICRODATA)
}

/// One record per `[typeof]` element.
pub fn scrape_rdfa<P: PageAccessor>(page: &P) -> Vec<SchemaRecord> {
    scoped_records(page, &RDFA)
}
