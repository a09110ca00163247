use pretty_assertions::assert_eq;
use serde_json::json;
use shopquery::{BackendKind, CompiledQuery, DocumentQuery, Engine};

#[test]
fn relational_join_qualification_is_whole_word() {
    let engine = Engine::new();
    let sql = match engine
        .compile(
            "show me appliances related to air conditioners with comments greater than 1000",
            BackendKind::Relational,
        )
        .unwrap()
    {
        CompiledQuery::Sql(sql) => sql,
        other => panic!("expected SQL, got {other:?}"),
    };

    assert!(sql.contains("WHERE t1.no_of_ratings > 1000"));
    assert!(!sql.contains("no_of_t1.ratings"));
}

#[test]
fn document_single_predicate_is_unwrapped() {
    let engine = Engine::new();
    let query = engine
        .compile(
            "show me appliances with rating greater than 4.5",
            BackendKind::Document,
        )
        .unwrap();

    let find = match query {
        CompiledQuery::Document(DocumentQuery::Find(find)) => find,
        other => panic!("expected a find query, got {other:?}"),
    };
    assert_eq!(find.filter, json!({"ratings": {"$gt": "4.5"}}));
}

#[test]
fn document_multiple_predicates_are_and_wrapped() {
    let engine = Engine::new();
    let query = engine
        .compile(
            "show me appliances with rating greater than 4 and comments greater than 1000",
            BackendKind::Document,
        )
        .unwrap();

    let find = match query {
        CompiledQuery::Document(DocumentQuery::Find(find)) => find,
        other => panic!("expected a find query, got {other:?}"),
    };
    assert!(find.filter.get("$and").is_some());
}

#[test]
fn grouped_document_pipeline_shape() {
    let engine = Engine::new();
    let query = engine
        .compile(
            "show total number of appliances with rating greater than 4 group by category",
            BackendKind::Document,
        )
        .unwrap();

    let agg = match query {
        CompiledQuery::Document(DocumentQuery::Aggregate(agg)) => agg,
        other => panic!("expected a pipeline, got {other:?}"),
    };
    assert_eq!(
        agg.pipeline,
        vec![
            json!({"$match": {"ratings": {"$gt": "4"}}}),
            json!({"$group": {"_id": "$sub_category", "count": {"$sum": 1}}}),
            json!({"$sort": {"count": -1}}),
        ]
    );
}

#[test]
fn both_backends_share_parse_semantics() {
    let engine = Engine::new();
    let question = "show me air conditioners with price between 1000 and 5000";

    let intent = engine.translate(question).unwrap();
    let sql = engine.compile_relational(&intent).unwrap();
    let document = engine.compile_document(&intent).unwrap();

    // Both compiled forms embed the currency normalization; neither
    // expects pre-normalized stored data.
    assert!(sql.contains("REPLACE(REPLACE(discount_price, '₹', ''), ',', '')"));
    let find = match document {
        DocumentQuery::Find(find) => find,
        other => panic!("expected a find query, got {other:?}"),
    };
    assert!(find.filter.to_string().contains("$replaceAll"));
}

#[test]
fn compilation_is_idempotent_per_intent() {
    let engine = Engine::new();
    let intent = engine
        .translate("show me appliances with rating greater than 4.2 in ascending price")
        .unwrap();

    assert_eq!(
        engine.compile_relational(&intent).unwrap(),
        engine.compile_relational(&intent).unwrap()
    );
    assert_eq!(
        engine.compile_document(&intent).unwrap(),
        engine.compile_document(&intent).unwrap()
    );
}

#[test]
fn group_plus_join_is_rejected_by_both_compilers() {
    let engine = Engine::new();
    let intent = engine
        .translate(
            "show total number of appliances related to air conditioners group by category",
        )
        .unwrap();

    assert!(intent.group.is_some());
    assert!(intent.join.is_some());
    assert!(engine
        .compile_relational(&intent)
        .unwrap_err()
        .is_unsupported_combination());
    assert!(engine
        .compile_document(&intent)
        .unwrap_err()
        .is_unsupported_combination());
}
