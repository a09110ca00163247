use std::fmt;

/// The intent combines features whose compiled form is undefined.
///
/// Rejected rather than guessing an output shape.
#[derive(Debug)]
pub(crate) struct UnsupportedCombinationError {
    pub(crate) detail: String,
}

impl fmt::Display for UnsupportedCombinationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported combination: {}", self.detail)
    }
}
