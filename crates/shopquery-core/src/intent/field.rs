use serde::Serialize;

/// A filterable field of the product schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Rating,
    CommentCount,
    Price,
}

impl Field {
    /// The stored column (or document field) name.
    pub fn column(self) -> &'static str {
        match self {
            Field::Rating => "ratings",
            Field::CommentCount => "no_of_ratings",
            Field::Price => "discount_price",
        }
    }
}
