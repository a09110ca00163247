use std::fmt;

/// No known category phrase was found in the question.
///
/// Always fatal to the translation; the caller should re-prompt with the
/// list of known category phrases.
#[derive(Debug)]
pub(crate) struct UnresolvedCategoryError {
    pub(crate) question: String,
    pub(crate) known_phrases: Vec<String>,
}

impl fmt::Display for UnresolvedCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not identify a product category in {:?}; known categories are: {}",
            self.question,
            self.known_phrases.join(", ")
        )
    }
}
