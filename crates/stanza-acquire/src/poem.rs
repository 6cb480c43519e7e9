use crate::config::SiteConfig;
use crate::error::ExtractionError;
use crate::select::{self, Selection};
use scraper::Html;
use stanza_model::{Field, PoemRecord};

/// Parse a poem page into a record.
///
/// Each field's marker must match exactly one element. The first field that
/// doesn't fails the whole page; a partial record is never returned.
pub fn extract_poem(html: &str, config: &SiteConfig) -> Result<PoemRecord, ExtractionError> {
    let document = Html::parse_document(html);

    let title = extract_field(&document, Field::Title, &config.title_marker)?;
    let poet = extract_field(&document, Field::Poet, &config.poet_marker)?;
    let body = extract_field(&document, Field::Body, &config.body_marker)?;

    Ok(PoemRecord { title, poet, body })
}

fn extract_field(document: &Html, field: Field, marker: &str) -> Result<String, ExtractionError> {
    match select::select_one(document, marker) {
        Selection::Single(el) => Ok(select::text_content(el)),
        other => Err(ExtractionError {
            field,
            marker: marker.to_string(),
            found: other.count(),
        }),
    }
}
