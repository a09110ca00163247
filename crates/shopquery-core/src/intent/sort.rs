use serde::Serialize;

/// Sort order for the price field.
///
/// Price is the only sortable field; at most one sort applies per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Asc,
    Desc,
}

impl SortSpec {
    pub fn ascending() -> Self {
        Self {
            direction: Direction::Asc,
        }
    }

    pub fn descending() -> Self {
        Self {
            direction: Direction::Desc,
        }
    }
}
