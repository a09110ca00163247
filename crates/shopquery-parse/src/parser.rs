use crate::{category, join, modifier, normalize, predicate};

use shopquery_core::{
    intent::{Field, QueryIntent},
    schema::{Catalog, Synonyms},
    Result,
};

/// Parses a constrained natural-language question into a [`QueryIntent`].
///
/// Holds references to the process-wide, read-only catalog and synonym
/// tables. Each `parse` call is an independent, pure transformation; the
/// parser carries no cross-call state.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    catalog: &'a Catalog,
    synonyms: &'a Synonyms,
}

impl<'a> Parser<'a> {
    pub fn new(catalog: &'a Catalog, synonyms: &'a Synonyms) -> Self {
        Self { catalog, synonyms }
    }

    /// Assemble a question into a query intent.
    ///
    /// Fails only on an unresolvable category or invalid join arity; every
    /// other extraction step is lenient and simply contributes nothing.
    /// Unsupported feature combinations are left for the compilers to
    /// reject.
    pub fn parse(&self, question: &str) -> Result<QueryIntent> {
        let text = normalize::normalize(question, self.synonyms);

        let category = category::resolve(&text, self.catalog)?;
        let mut predicates = predicate::extract(&text);
        let modifiers = modifier::extract(&text);
        let join = join::detect(&text, category, self.catalog)?;

        if modifiers.group.is_some() {
            // Group-mode predicate capture is single-predicate: a rating
            // threshold replaces everything else that matched. Other
            // predicate families are kept as-is when no rating phrase is
            // present.
            if let Some(rating) = predicates
                .iter()
                .find(|p| p.field == Field::Rating)
                .cloned()
            {
                predicates = vec![rating];
            }
        }

        Ok(QueryIntent {
            category,
            predicates,
            sort: modifiers.sort,
            limit: modifiers.limit,
            group: modifiers.group,
            join,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shopquery_core::intent::{Aggregate, Category, GroupField, GroupSpec, Predicate};

    fn parse(question: &str) -> Result<QueryIntent> {
        let catalog = Catalog::new();
        let synonyms = Synonyms::new();
        Parser::new(&catalog, &synonyms).parse(question)
    }

    #[test]
    fn two_predicates_and_combined() {
        let intent =
            parse("show me appliances with rating greater than 4.2 and comments greater than 3000")
                .unwrap();

        assert_eq!(intent.category, Category::Appliances);
        assert_eq!(
            intent.predicates,
            vec![
                Predicate::greater_than(Field::Rating, 4.2),
                Predicate::greater_than(Field::CommentCount, 3000u64),
            ]
        );
        assert_eq!(intent.sort, None);
        assert_eq!(intent.limit, None);
        assert_eq!(intent.group, None);
        assert_eq!(intent.join, None);
    }

    #[test]
    fn grouped_count_leaves_limit_unset() {
        let intent = parse("show total number of appliances group by category").unwrap();

        assert_eq!(intent.category, Category::Appliances);
        assert_eq!(
            intent.group,
            Some(GroupSpec {
                field: GroupField::SubCategory,
                aggregate: Aggregate::Count,
            })
        );
        assert_eq!(intent.limit, None);
    }

    #[test]
    fn group_mode_rating_threshold_replaces_other_predicates() {
        let intent = parse(
            "show total number of appliances with rating greater than 4 \
             and comments greater than 1000 group by category",
        )
        .unwrap();

        assert_eq!(
            intent.predicates,
            vec![Predicate::greater_than(Field::Rating, 4.0)]
        );
    }

    #[test]
    fn group_mode_keeps_non_rating_predicates() {
        let intent =
            parse("show total number of appliances with comments greater than 5000 group by category")
                .unwrap();

        assert_eq!(
            intent.predicates,
            vec![Predicate::greater_than(Field::CommentCount, 5000u64)]
        );
    }

    #[test]
    fn explicit_limit_survives_grouping() {
        let intent =
            parse("show total number of appliances group by category limit 10 records").unwrap();
        assert_eq!(intent.limit, Some(10));
    }

    #[test]
    fn normalized_verb_feeds_the_rest_of_the_pipeline() {
        let intent = parse("Display me appliances limit 10 records").unwrap();
        assert_eq!(intent.category, Category::Appliances);
        assert_eq!(intent.limit, Some(10));
    }

    #[test]
    fn unresolved_category_propagates() {
        let err = parse("show me bicycles with rating greater than 4").unwrap_err();
        assert!(err.is_unresolved_category());
    }

    #[test]
    fn invalid_join_arity_propagates() {
        let err = parse("show me appliances together with air conditioners").unwrap_err();
        assert!(err.is_invalid_join_arity());
    }
}
