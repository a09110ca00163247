use shopquery_core::{intent::Category, schema::Catalog, Error, Result};

/// Resolve the primary category of a normalized question.
///
/// Scans for each known category phrase as a plain substring, in
/// catalog-declaration order, and returns the first match. Substring
/// matching (rather than tokenizing) keeps multi-word phrases like
/// "car and motorbike products" working; the known limitation is that a
/// phrase embedded inside another word would false-match.
pub(crate) fn resolve(text: &str, catalog: &Catalog) -> Result<Category> {
    for entry in catalog.entries() {
        if text.contains(entry.phrase) {
            return Ok(entry.category);
        }
    }

    Err(Error::unresolved_category(text, catalog.phrases()))
}
