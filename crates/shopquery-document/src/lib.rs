mod filter;
mod pipeline;

use serde::Serialize;
use serde_json::{json, Value};
use shopquery_core::{schema::Catalog, Error, QueryIntent, Result};

/// Result limit applied to find-style queries when the question does not
/// state one. Grouped queries never take the default.
const DEFAULT_LIMIT: u64 = 5;

/// A compiled document-store query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DocumentQuery {
    /// A find-style query: filter document plus options.
    Find(FindQuery),
    /// An aggregation pipeline.
    Aggregate(AggregateQuery),
}

/// A find-style query against a single collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindQuery {
    pub collection: String,
    /// The filter document. A single predicate is emitted unwrapped; two
    /// or more are combined under an explicit `$and`.
    pub filter: Value,
    pub projection: Value,
    pub sort: Option<Value>,
    pub limit: Option<u64>,
}

/// An aggregation pipeline against a single collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateQuery {
    pub collection: String,
    pub pipeline: Vec<Value>,
}

/// Renders a query intent as a document-store query.
#[derive(Debug)]
pub struct Compiler<'a> {
    catalog: &'a Catalog,
}

impl<'a> Compiler<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Compile an intent to a filter document or an aggregation pipeline.
    ///
    /// Shape selection: a group compiles to the grouped pipeline, a join
    /// to a `$lookup` pipeline, anything else to a find-style query.
    /// Rejects a grouped intent that also carries a join: the combined
    /// compiled form is undefined.
    pub fn compile(&self, intent: &QueryIntent) -> Result<DocumentQuery> {
        if intent.is_grouped() && intent.is_joined() {
            return Err(Error::unsupported_combination(
                "a group by cannot be combined with a join",
            ));
        }

        let collection = self.catalog.table(intent.category).to_string();

        if intent.is_grouped() {
            return Ok(DocumentQuery::Aggregate(AggregateQuery {
                collection,
                pipeline: pipeline::grouped(intent),
            }));
        }

        if intent.is_joined() {
            return Ok(DocumentQuery::Aggregate(AggregateQuery {
                collection,
                pipeline: pipeline::lookup(intent, self.catalog),
            }));
        }

        Ok(DocumentQuery::Find(FindQuery {
            collection,
            filter: filter::document(&intent.predicates),
            projection: projection(),
            sort: intent.sort.as_ref().map(filter::sort_document),
            limit: Some(intent.limit.unwrap_or(DEFAULT_LIMIT)),
        }))
    }
}

/// The fields returned to the user; the document id is never shown.
pub(crate) fn projection() -> Value {
    json!({
        "name": 1,
        "ratings": 1,
        "no_of_ratings": 1,
        "discount_price": 1,
        "actual_price": 1,
        "_id": 0,
    })
}
