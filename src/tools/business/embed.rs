use url::form_urlencoded;

use crate::types::BusinessFacts;

const EMBED_BASE: &str = "https://maps.google.com/maps";
const EMBED_ZOOM: &str = "15";

/// An `<iframe>` embedding the business on Google Maps.
///
/// Maps pages need only a name and centre on the known coordinates; other
/// pages search for `"<name>, <address>"` and so need both.
pub fn map_embed(facts: &BusinessFacts, is_maps: bool) -> Option<String> {
    let name = facts.name.as_deref()?;
    let mut query = form_urlencoded::Serializer::new(String::new());

    if is_maps {
        if let Some(coordinates) = facts.coordinates.as_deref() {
            query.append_pair("center", &coordinates.replace(' ', ""));
            query.append_pair("zoom", EMBED_ZOOM);
        }
        query.append_pair("q", name);
    } else {
        let address = facts.address.as_deref()?;
        query.append_pair("q", &format!("{name}, {address}"));
    }
    query.append_pair("output", "embed");

    let src = format!("{EMBED_BASE}?{}", query.finish());
    Some(format!(
        r#"<iframe src="{}" width="600" height="450" style="border:0;" allowfullscreen="" loading="lazy" referrerpolicy="no-referrer-when-downgrade"></iframe>"#,
        html_escape::encode_double_quoted_attribute(&src)
    ))
}
