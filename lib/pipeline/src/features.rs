use reelrank_core::{Catalog, Item, Result};
use serde::Deserialize;
use tracing::info;

/// Leading cast entries that contribute to the tag text.
const CAST_LIMIT: usize = 3;

/// Raw metadata record for one catalog item, as exported from the source
/// dataset. Every field except `id` and `title` is optional; missing fields
/// contribute no tokens.
///
/// Upstream convention: `crew` is expected to already be reduced to the
/// credits worth matching on (typically the directors), while `cast` may be
/// the full billing order and is truncated here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub crew: Vec<String>,
}

/// Tokenize free text: lowercase, split on whitespace and punctuation,
/// keep alphanumeric tokens longer than one character.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .map(|s| s.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|s| !s.is_empty() && s.len() > 1)
        .collect()
}

/// Collapse a label to a single lowercase alphanumeric token, so multi-word
/// labels ("Science Fiction", "Sam Worthington") stay distinct from their
/// constituent words.
pub fn label_token(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Derive the normalized tag text for one record.
///
/// Field order is fixed (overview, genres, keywords, cast, crew) so rebuilds
/// from the same input are reproducible.
fn tag_text(record: &RawRecord) -> String {
    let mut tokens = tokenize(&record.overview);
    for label in &record.genres {
        tokens.push(label_token(label));
    }
    for label in &record.keywords {
        tokens.push(label_token(label));
    }
    for label in record.cast.iter().take(CAST_LIMIT) {
        tokens.push(label_token(label));
    }
    for label in &record.crew {
        tokens.push(label_token(label));
    }
    tokens.retain(|t| !t.is_empty());
    tokens.join(" ")
}

/// Build the item table from raw metadata records.
///
/// Input order fixes the item index for this build. Fails with a build
/// error on an empty title or duplicate id; a malformed source catalog
/// aborts the whole pipeline rather than producing a partial artifact.
pub fn build_catalog(records: &[RawRecord]) -> Result<Catalog> {
    let items: Vec<Item> = records
        .iter()
        .map(|record| Item {
            id: record.id,
            title: record.title.clone(),
            tag_text: tag_text(record),
        })
        .collect();

    let catalog = Catalog::new(items)?;
    info!(items = catalog.len(), "built feature catalog");
    Ok(catalog)
}
