use shopquery_core::schema::Synonyms;

/// Canonicalize the leading command verb of a question.
///
/// Case-folds the whole question, collapses whitespace, and replaces the
/// first token through the synonym table. The rest of the text is left
/// untouched; an unknown first token passes through as-is.
pub(crate) fn normalize(question: &str, synonyms: &Synonyms) -> String {
    let lowered = question.to_lowercase();
    let mut words: Vec<&str> = lowered.split_whitespace().collect();

    if let Some(first) = words.first() {
        if let Some(canonical) = synonyms.canonical(first) {
            words[0] = canonical;
        }
    }

    words.join(" ")
}
