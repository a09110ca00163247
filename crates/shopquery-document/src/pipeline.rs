use crate::{filter, projection};

use serde_json::{json, Map, Value};
use shopquery_core::{
    intent::{Aggregate, JoinArity, JoinSpec, QueryIntent},
    schema::Catalog,
};

/// Build the grouped aggregation pipeline.
///
/// Stages, in order: an optional `$match` emitted only when a rating
/// threshold is present, a `$group` keyed by the group field with a count
/// accumulator (plus an average-rating accumulator when that aggregate is
/// selected), and a trailing `$sort` by the count, descending.
pub(crate) fn grouped(intent: &QueryIntent) -> Vec<Value> {
    let group = match intent.group {
        Some(group) => group,
        None => return Vec::new(),
    };

    let mut stages = Vec::new();

    if let Some(threshold) = intent
        .predicates
        .iter()
        .find_map(|p| p.as_rating_threshold())
    {
        stages.push(json!({
            "$match": { "ratings": { "$gt": threshold.to_string() } }
        }));
    }

    let mut accumulators = Map::new();
    accumulators.insert("_id".into(), json!(format!("${}", group.field.column())));
    accumulators.insert("count".into(), json!({ "$sum": 1 }));
    if group.aggregate == Aggregate::AverageRating {
        accumulators.insert(
            "avg_rating".into(),
            json!({ "$avg": { "$toDouble": "$ratings" } }),
        );
    }
    stages.push(json!({ "$group": accumulators }));

    stages.push(json!({ "$sort": { "count": -1 } }));

    stages
}

/// Build the `$lookup` pipeline for a joined intent.
///
/// Two-table joins look the target up on the catalog join-key heuristic;
/// three-table joins look the second category up on `sub_category` and
/// the third up on `main_category`. Predicates become a `$match` stage
/// over the full filter document, and a final `$project` returns the
/// standard fields plus the looked-up arrays.
pub(crate) fn lookup(intent: &QueryIntent, catalog: &Catalog) -> Vec<Value> {
    let join = match &intent.join {
        Some(join) => join,
        None => return Vec::new(),
    };

    let mut stages = Vec::new();
    let mut related = Vec::new();

    match join.arity() {
        JoinArity::Two => {
            let key = catalog.join_key(intent.category);
            related.push(push_lookup(&mut stages, catalog, join, 0, key));
        }
        JoinArity::Three => {
            related.push(push_lookup(&mut stages, catalog, join, 0, "sub_category"));
            related.push(push_lookup(&mut stages, catalog, join, 1, "main_category"));
        }
    }

    if !intent.predicates.is_empty() {
        stages.push(json!({ "$match": filter::document(&intent.predicates) }));
    }

    let mut project = match projection() {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    // The lookup arrays ride along with the standard fields.
    project.remove("_id");
    for name in related {
        project.insert(name, json!(1));
    }
    stages.push(json!({ "$project": project }));

    stages
}

fn push_lookup(
    stages: &mut Vec<Value>,
    catalog: &Catalog,
    join: &JoinSpec,
    target: usize,
    key: &str,
) -> String {
    let collection = catalog.table(join.targets[target]);
    let alias = format!("related_{collection}");

    stages.push(json!({
        "$lookup": {
            "from": collection,
            "localField": key,
            "foreignField": key,
            "as": alias,
        }
    }));

    alias
}
