//! Translates a constrained subset of natural-language questions about a
//! fixed set of product categories into executable database queries, for
//! either a relational backend or a document-store backend.
//!
//! A question is parsed once into a backend-neutral [`QueryIntent`] and
//! then rendered by one of two compilers. The generated query text
//! interpolates the question's literal values directly; it is meant for
//! the trusted interactive flow it came from and is not hardened against
//! injection.
//!
//! ```
//! use shopquery::{BackendKind, Engine};
//!
//! let engine = Engine::new();
//! let intent = engine
//!     .translate("show me appliances with rating greater than 4.2")
//!     .unwrap();
//! let sql = engine.compile_relational(&intent).unwrap();
//! assert_eq!(sql, "SELECT * FROM all_appliances WHERE ratings > 4.2");
//! ```

pub use shopquery_core::{intent, schema, Error, QueryIntent, Result};
pub use shopquery_document::{AggregateQuery, DocumentQuery, FindQuery};

use shopquery_core::schema::{Catalog, Synonyms};
use shopquery_parse::Parser;

/// Which backend a question should be compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Relational,
    Document,
}

/// A compiled query, ready to hand to the execution layer.
///
/// The execution layer treats translation errors as user-facing parse
/// failures and anything below as ready-to-execute query text.
#[derive(Debug, Clone, PartialEq)]
pub enum CompiledQuery {
    Sql(String),
    Document(DocumentQuery),
}

/// The translation engine.
///
/// Owns the process-wide, read-only catalog and verb-synonym tables,
/// initialized once at construction and never mutated. Every operation
/// is a pure, deterministic transformation, so an `Engine` can be shared
/// across threads freely.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Catalog,
    synonyms: Synonyms,
}

impl Engine {
    /// An engine over the reference product domain.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            synonyms: Synonyms::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Parse a question into its backend-neutral intent.
    pub fn translate(&self, question: &str) -> Result<QueryIntent> {
        Parser::new(&self.catalog, &self.synonyms).parse(question)
    }

    /// Render an intent as relational query text.
    pub fn compile_relational(&self, intent: &QueryIntent) -> Result<String> {
        shopquery_sql::Serializer::new(&self.catalog).serialize(intent)
    }

    /// Render an intent as a document-store filter or pipeline.
    pub fn compile_document(&self, intent: &QueryIntent) -> Result<DocumentQuery> {
        shopquery_document::Compiler::new(&self.catalog).compile(intent)
    }

    /// Translate and compile in one step for the configured backend.
    pub fn compile(&self, question: &str, backend: BackendKind) -> Result<CompiledQuery> {
        let intent = self.translate(question)?;

        match backend {
            BackendKind::Relational => {
                Ok(CompiledQuery::Sql(self.compile_relational(&intent)?))
            }
            BackendKind::Document => {
                Ok(CompiledQuery::Document(self.compile_document(&intent)?))
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
