use serde::Serialize;

/// A group-by request with its aggregate selection.
///
/// Presence of a group suppresses the backend default result limit; an
/// explicitly stated limit stays on the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupSpec {
    pub field: GroupField,
    pub aggregate: Aggregate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GroupField {
    SubCategory,
    MainCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Aggregate {
    Count,
    AverageRating,
}

impl GroupField {
    /// The stored column (or document field) grouped on.
    pub fn column(self) -> &'static str {
        match self {
            GroupField::SubCategory => "sub_category",
            GroupField::MainCategory => "main_category",
        }
    }
}
