use super::{Formatter, ToSql};

use shopquery_core::intent::{
    Comparison, Direction, Field, JoinKind, Number, Predicate, SortSpec,
};

/// The stored price text wrapped in currency-stripping and numeric-cast
/// expressions. The rule lives in the generated query; stored data is
/// never pre-normalized.
pub(super) struct NumericPrice;

impl ToSql for NumericPrice {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f,
            "CAST(REPLACE(REPLACE(",
            Field::Price,
            ", '₹', ''), ',', '') AS DECIMAL)"
        );
    }
}

impl ToSql for Field {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(alias) = f.qualify {
            fmt!(f, alias, ".", self.column());
        } else {
            fmt!(f, self.column());
        }
    }
}

impl ToSql for &Predicate {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match (self.field, &self.op) {
            (Field::Price, Comparison::GreaterThan(value)) => {
                fmt!(f, NumericPrice, " > ", value);
            }
            (Field::Price, Comparison::Between(lo, hi)) => {
                fmt!(f, NumericPrice, " BETWEEN ", lo, " AND ", hi);
            }
            (Field::Rating, Comparison::GreaterThan(value)) if f.rating_cast => {
                fmt!(f, "CAST(", Field::Rating, " AS DECIMAL(10,2)) > ", value);
            }
            (field, Comparison::GreaterThan(value)) => {
                fmt!(f, field, " > ", value);
            }
            (field, Comparison::Between(lo, hi)) => {
                fmt!(f, field, " BETWEEN ", lo, " AND ", hi);
            }
        }
    }
}

impl ToSql for &Number {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use std::fmt::Write;
        let _ = write!(f.dst, "{self}");
    }
}

impl ToSql for &SortSpec {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let direction = match self.direction {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        };
        fmt!(f, NumericPrice, " ", direction);
    }
}

impl ToSql for JoinKind {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
        })
    }
}
