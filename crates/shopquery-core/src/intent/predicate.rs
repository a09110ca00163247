use super::{Field, Number};
use serde::Serialize;

/// A single field/operator/value filter condition.
///
/// Multiple predicates on an intent combine with logical AND only; there
/// is no OR and no NOT.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Predicate {
    pub field: Field,
    pub op: Comparison,
}

/// The comparison applied by a predicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Comparison {
    GreaterThan(Number),
    /// Inclusive on both bounds.
    Between(Number, Number),
}

impl Predicate {
    pub fn greater_than(field: Field, value: impl Into<Number>) -> Self {
        Self {
            field,
            op: Comparison::GreaterThan(value.into()),
        }
    }

    pub fn between(field: Field, lo: impl Into<Number>, hi: impl Into<Number>) -> Self {
        Self {
            field,
            op: Comparison::Between(lo.into(), hi.into()),
        }
    }

    /// Returns the threshold when this is a rating lower-bound predicate.
    pub fn as_rating_threshold(&self) -> Option<Number> {
        match (self.field, &self.op) {
            (Field::Rating, Comparison::GreaterThan(value)) => Some(*value),
            _ => None,
        }
    }
}
