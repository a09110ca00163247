use std::fmt;

/// A one-off error built from a formatted message.
#[derive(Debug)]
pub(crate) struct AdhocError {
    pub(crate) message: String,
}

impl fmt::Display for AdhocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
