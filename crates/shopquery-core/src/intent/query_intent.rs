use super::{Category, GroupSpec, JoinSpec, Predicate, SortSpec};
use serde::Serialize;

/// The backend-neutral representation assembled from a parsed question.
///
/// Built once per question and immutable after assembly. A category is
/// always present; its absence is a parse failure, never a default. The
/// predicate list is AND-combined. A group and a join may coexist here
/// syntactically, but compilers reject the combination because its
/// compiled form is undefined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryIntent {
    pub category: Category,
    pub predicates: Vec<Predicate>,
    pub sort: Option<SortSpec>,
    /// Explicitly requested result limit. `None` leaves the limit to the
    /// backend default.
    pub limit: Option<u64>,
    pub group: Option<GroupSpec>,
    pub join: Option<JoinSpec>,
}

impl QueryIntent {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            predicates: Vec::new(),
            sort: None,
            limit: None,
            group: None,
            join: None,
        }
    }

    pub fn is_grouped(&self) -> bool {
        self.group.is_some()
    }

    pub fn is_joined(&self) -> bool {
        self.join.is_some()
    }
}
