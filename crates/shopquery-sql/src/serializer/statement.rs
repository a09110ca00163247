use super::{Delimited, Formatter, ToSql};

use shopquery_core::{
    intent::{Aggregate, GroupSpec, JoinArity, JoinSpec, QueryIntent},
    schema::Catalog,
};

impl ToSql for &QueryIntent {
    fn to_sql(self, f: &mut Formatter<'_>) {
        // Shape priority: grouped aggregate, then join, then plain select.
        if let Some(group) = self.group {
            GroupedSelect {
                intent: self,
                group,
            }
            .to_sql(f);
        } else if let Some(join) = &self.join {
            JoinSelect { intent: self, join }.to_sql(f);
        } else {
            PlainSelect(self).to_sql(f);
        }
    }
}

struct GroupedSelect<'a> {
    intent: &'a QueryIntent,
    group: GroupSpec,
}

impl ToSql for GroupedSelect<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = table_of(f, self.intent);
        let column = self.group.field.column();

        match self.group.aggregate {
            Aggregate::Count => {
                fmt!(f, "SELECT ", column, ", COUNT(*) AS count FROM ", table);
            }
            Aggregate::AverageRating => {
                fmt!(
                    f,
                    "SELECT ",
                    column,
                    ", AVG(CAST(ratings AS DECIMAL(10,2))) AS average_rating FROM ",
                    table
                );
            }
        }

        if !self.intent.predicates.is_empty() {
            f.rating_cast = true;
            fmt!(f, " WHERE ", Delimited(&self.intent.predicates, " AND "));
            f.rating_cast = false;
        }

        match self.group.aggregate {
            Aggregate::Count => {
                fmt!(f, " GROUP BY ", column, " ORDER BY count DESC");
            }
            Aggregate::AverageRating => {
                fmt!(f, " GROUP BY ", column, " ORDER BY average_rating DESC");
            }
        }
    }
}

struct JoinSelect<'a> {
    intent: &'a QueryIntent,
    join: &'a JoinSpec,
}

impl ToSql for JoinSelect<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let catalog = catalog_of(f);
        let primary = catalog.table(self.intent.category);

        match self.join.arity() {
            JoinArity::Two => {
                let target = catalog.table(self.join.targets[0]);
                let key = catalog.join_key(self.intent.category);

                fmt!(
                    f,
                    "SELECT t1.id AS ",
                    primary,
                    "_id, t1.name, t1.ratings, t1.no_of_ratings, t1.discount_price, \
                     t1.actual_price, t1.sub_category AS category, t2.id AS ",
                    target,
                    "_id, t2.sub_category AS related_category FROM ",
                    primary,
                    " t1 ",
                    self.join.kind,
                    " ",
                    target,
                    " t2 ON t1.",
                    key,
                    " = t2.",
                    key
                );
            }
            JoinArity::Three => {
                let second = catalog.table(self.join.targets[0]);
                let third = catalog.table(self.join.targets[1]);

                fmt!(
                    f,
                    "SELECT t1.id AS ",
                    primary,
                    "_id, t1.name, t1.ratings, t1.no_of_ratings, t1.discount_price, \
                     t1.actual_price, t1.sub_category AS main_category, t2.id AS ",
                    second,
                    "_id, t2.sub_category AS related_category1, t3.id AS ",
                    third,
                    "_id, t3.sub_category AS related_category2 FROM ",
                    primary,
                    " t1 INNER JOIN ",
                    second,
                    " t2 ON t1.sub_category = t2.sub_category INNER JOIN ",
                    third,
                    " t3 ON t1.main_category = t3.main_category"
                );
            }
        }

        if !self.intent.predicates.is_empty() {
            f.qualify = Some("t1");
            fmt!(f, " WHERE ", Delimited(&self.intent.predicates, " AND "));
            f.qualify = None;
        }
    }
}

struct PlainSelect<'a>(&'a QueryIntent);

impl ToSql for PlainSelect<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = table_of(f, self.0);

        fmt!(f, "SELECT * FROM ", table);

        if !self.0.predicates.is_empty() {
            fmt!(f, " WHERE ", Delimited(&self.0.predicates, " AND "));
        }

        if let Some(sort) = &self.0.sort {
            fmt!(f, " ORDER BY ", sort);
        }

        if let Some(limit) = self.0.limit {
            fmt!(f, " LIMIT ", limit);
        }
    }
}

fn catalog_of<'a>(f: &Formatter<'a>) -> &'a Catalog {
    f.serializer.catalog
}

fn table_of(f: &Formatter<'_>, intent: &QueryIntent) -> &'static str {
    f.serializer.catalog.table(intent.category)
}
