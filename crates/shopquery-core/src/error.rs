mod adhoc;
mod invalid_join_arity;
mod unresolved_category;
mod unsupported_combination;

use adhoc::AdhocError;
use invalid_join_arity::InvalidJoinArityError;
use std::sync::Arc;
use unresolved_category::UnresolvedCategoryError;
use unsupported_combination::UnsupportedCombinationError;

/// Helper macro for creating adhoc errors with formatted messages.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while translating a question into a query.
///
/// Translation failures carry a specific kind so the calling layer can
/// distinguish a missing category phrase from bad join phrasing and show
/// the user a corrective message rather than a generic failure.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    UnresolvedCategory(UnresolvedCategoryError),
    InvalidJoinArity(InvalidJoinArityError),
    UnsupportedCombination(UnsupportedCombinationError),
}

impl Error {
    /// No known category phrase was found in the question.
    pub fn unresolved_category(question: impl Into<String>, known_phrases: Vec<String>) -> Error {
        Error::from(ErrorKind::UnresolvedCategory(UnresolvedCategoryError {
            question: question.into(),
            known_phrases,
        }))
    }

    /// Three-table join phrasing was present, but the wrong number of
    /// additional categories was found.
    pub fn invalid_join_arity(found: usize) -> Error {
        Error::from(ErrorKind::InvalidJoinArity(InvalidJoinArityError { found }))
    }

    /// The intent combines features that have no defined compiled form.
    pub fn unsupported_combination(detail: impl Into<String>) -> Error {
        Error::from(ErrorKind::UnsupportedCombination(
            UnsupportedCombinationError {
                detail: detail.into(),
            },
        ))
    }

    #[doc(hidden)]
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError {
            message: args.to_string(),
        }))
    }

    pub fn is_unresolved_category(&self) -> bool {
        matches!(self.kind(), ErrorKind::UnresolvedCategory(_))
    }

    pub fn is_invalid_join_arity(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidJoinArity(_))
    }

    pub fn is_unsupported_combination(&self) -> bool {
        matches!(self.kind(), ErrorKind::UnsupportedCombination(_))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            UnresolvedCategory(err) => core::fmt::Display::fmt(err, f),
            InvalidJoinArity(err) => core::fmt::Display::fmt(err, f),
            UnsupportedCombination(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_category_names_known_phrases() {
        let err = Error::unresolved_category(
            "show me toasters",
            vec!["appliances".to_string(), "air conditioners".to_string()],
        );
        assert!(err.is_unresolved_category());
        let rendered = err.to_string();
        assert!(rendered.contains("could not identify a product category"));
        assert!(rendered.contains("appliances, air conditioners"));
    }

    #[test]
    fn invalid_join_arity_shows_corrective_example() {
        let err = Error::invalid_join_arity(1);
        assert!(err.is_invalid_join_arity());
        let rendered = err.to_string();
        assert!(rendered.contains("exactly two additional categories (found 1)"));
        assert!(rendered.contains("together with"));
    }

    #[test]
    fn unsupported_combination_display() {
        let err = Error::unsupported_combination("group by with a join");
        assert!(err.is_unsupported_combination());
        assert_eq!(
            err.to_string(),
            "unsupported combination: group by with a join"
        );
    }

    #[test]
    fn adhoc_from_args() {
        let err = err!("translation failed: {}", 42);
        assert_eq!(err.to_string(), "translation failed: 42");
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
        assert!(!our_err.is_unresolved_category());
    }
}
