use super::Category;
use serde::Serialize;

/// A join of the primary category with one or two additional categories.
///
/// Three-way joins are always inner joins. The join key is chosen by the
/// catalog heuristic (see [`Catalog::join_key`](crate::schema::Catalog::join_key))
/// and must be identical in both compilers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinSpec {
    /// The additional categories, in catalog-declaration order.
    pub targets: Vec<Category>,
    pub kind: JoinKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JoinKind {
    Inner,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JoinArity {
    Two,
    Three,
}

impl JoinSpec {
    pub fn two(target: Category, kind: JoinKind) -> Self {
        Self {
            targets: vec![target],
            kind,
        }
    }

    pub fn three(first: Category, second: Category) -> Self {
        Self {
            targets: vec![first, second],
            kind: JoinKind::Inner,
        }
    }

    /// The count of source references in the compiled query, including the
    /// primary category.
    pub fn arity(&self) -> JoinArity {
        match self.targets.len() {
            1 => JoinArity::Two,
            _ => JoinArity::Three,
        }
    }
}
