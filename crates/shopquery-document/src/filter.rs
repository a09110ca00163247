use serde_json::{json, Value};
use shopquery_core::intent::{Comparison, Direction, Field, Number, Predicate, SortSpec};

/// Build the filter document for a predicate list.
///
/// Zero predicates yield an empty document; a single predicate is emitted
/// unwrapped; two or more combine under an explicit `$and`.
pub(crate) fn document(predicates: &[Predicate]) -> Value {
    let mut clauses: Vec<Value> = predicates.iter().map(clause).collect();

    match clauses.len() {
        0 => json!({}),
        1 => clauses.remove(0),
        _ => json!({ "$and": clauses }),
    }
}

fn clause(predicate: &Predicate) -> Value {
    match (predicate.field, &predicate.op) {
        // Price comparisons normalize the stored currency text inside the
        // query itself, mirroring the relational compiler's inline cast.
        (Field::Price, Comparison::GreaterThan(value)) => json!({
            "$expr": { "$gt": [numeric_price(), number(value)] }
        }),
        (Field::Price, Comparison::Between(lo, hi)) => json!({
            "$expr": { "$and": [
                { "$gte": [numeric_price(), number(lo)] },
                { "$lte": [numeric_price(), number(hi)] },
            ]}
        }),
        // Rating and comment-count thresholds compare the stored string
        // values directly.
        (field, Comparison::GreaterThan(value)) => json!({
            (field.column()): { "$gt": value.to_string() }
        }),
        (field, Comparison::Between(lo, hi)) => json!({
            (field.column()): { "$gte": lo.to_string(), "$lte": hi.to_string() }
        }),
    }
}

/// The stored price stripped of the currency glyph and thousands
/// separators, cast to a double.
pub(crate) fn numeric_price() -> Value {
    json!({
        "$toDouble": {
            "$replaceAll": {
                "input": {
                    "$replaceAll": {
                        "input": "$discount_price",
                        "find": "₹",
                        "replacement": "",
                    }
                },
                "find": ",",
                "replacement": "",
            }
        }
    })
}

pub(crate) fn sort_document(sort: &SortSpec) -> Value {
    let order = match sort.direction {
        Direction::Asc => 1,
        Direction::Desc => -1,
    };
    json!({ "numeric_price": order })
}

fn number(value: &Number) -> Value {
    match value {
        Number::Int(v) => json!(v),
        Number::Decimal(v) => json!(v),
    }
}
