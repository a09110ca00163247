use std::fmt;

/// Three-table join phrasing named the wrong number of additional
/// categories.
#[derive(Debug)]
pub(crate) struct InvalidJoinArityError {
    /// How many additional categories were actually found.
    pub(crate) found: usize,
}

impl fmt::Display for InvalidJoinArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a three-table join needs both \"together with\" and \"connected to\" \
             naming exactly two additional categories (found {}); \
             example: show me appliances together with air conditioners \
             connected to car and motorbike products",
            self.found
        )
    }
}
