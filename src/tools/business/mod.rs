//! Local-Business Heuristics
//!
//! Facts are gathered from sources in priority order and merged with
//! [`BusinessFacts::absorb`], so a field set by an earlier source is never
//! overwritten by a later one:
//!
//! 1. the page itself: Google Maps DOM/URL on Maps pages, the title elsewhere
//! 2. Schema.org `LocalBusiness` / `Organization` / `Hotel` entities
//! 3. explicit knowledge-graph attributes, then `/g/…` ids in the raw markup
//! 4. generic rating/review patterns over the body text
//!
//! The map embed is built last from whatever was found.

mod embed;
mod maps;
mod patterns;
mod structured;
mod types;

pub use embed::map_embed;
pub use types::*;

use crate::tools::page::PageAccessor;
use crate::types::{BusinessFacts, SchemaRecord};

/// Run every business source against the page and merge the results.
pub fn scrape_business<P: PageAccessor>(
    page: &P,
    title: &str,
    schema: &[SchemaRecord],
) -> BusinessFacts {
    let ctx = BusinessContext::new(page, title, schema);

    let sources: [(&str, Source<P>); 4] = [
        (
            "page",
            if ctx.is_maps {
                maps::maps_facts
            } else {
                maps::title_facts
            },
        ),
        ("schema", structured::schema_facts),
        ("kg", patterns::kg_facts),
        ("patterns", patterns::pattern_facts),
    ];

    let mut facts = BusinessFacts::default();
    for (label, source) in sources {
        let found = source(&ctx);
        if !found.is_empty() {
            log::debug!("business source {label} contributed {found:?}");
        }
        facts.absorb(found);
    }

    facts.map_embed = map_embed(&facts, ctx.is_maps);
    facts
}

/// Whether a URL points at Google Maps.
pub fn is_maps_url(url: &str) -> bool {
    url.contains("google.com/maps")
}
