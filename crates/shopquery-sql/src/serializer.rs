#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Delimited;

// Fragment serializers
mod expr;
mod statement;

use shopquery_core::{schema::Catalog, Error, QueryIntent, Result};

/// Serialize a query intent to relational query text.
///
/// Serialization is a pure, deterministic transformation: the same intent
/// always yields identical query text. Literal values are interpolated
/// directly into the text; see the crate docs for the documented risk.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Catalog against which category identifiers are resolved
    catalog: &'a Catalog,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Table alias used to qualify column references when serializing the
    /// join form. Qualification happens as columns are rendered, so it is
    /// whole-word by construction and can never corrupt a longer column
    /// name that contains the shorter one.
    qualify: Option<&'static str>,

    /// True while serializing the WHERE clause of a grouped query, where
    /// the rating column gets an explicit decimal cast.
    rating_cast: bool,
}

impl<'a> Serializer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Render an intent as relational query text.
    ///
    /// Rejects a grouped intent that also carries a join: the combined
    /// compiled form is undefined.
    pub fn serialize(&self, intent: &QueryIntent) -> Result<String> {
        if intent.is_grouped() && intent.is_joined() {
            return Err(Error::unsupported_combination(
                "a group by cannot be combined with a join",
            ));
        }

        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            qualify: None,
            rating_cast: false,
        };

        intent.to_sql(&mut fmt);

        Ok(ret)
    }
}
