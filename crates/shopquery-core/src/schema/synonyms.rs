/// Verb synonyms canonicalized by the lexical normalizer.
///
/// Maps a leading command verb to its canonical form. Constructed once at
/// startup and never mutated.
#[derive(Debug, Clone)]
pub struct Synonyms {
    entries: Vec<(&'static str, &'static str)>,
}

impl Synonyms {
    pub fn new() -> Self {
        Self {
            entries: vec![
                ("show", "show"),
                ("display", "show"),
                ("list", "show"),
                ("find", "show"),
                ("get", "show"),
                ("search", "show"),
                ("give", "show"),
                ("tell", "show"),
                ("fetch", "show"),
                ("retrieve", "show"),
            ],
        }
    }

    /// The canonical form of a verb, if it is a known synonym.
    pub fn canonical(&self, verb: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(from, _)| *from == verb)
            .map(|(_, to)| *to)
    }
}

impl Default for Synonyms {
    fn default() -> Self {
        Self::new()
    }
}
