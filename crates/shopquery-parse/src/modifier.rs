use once_cell::sync::Lazy;
use regex::Regex;
use shopquery_core::intent::{Aggregate, GroupField, GroupSpec, SortSpec};

static LIMIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"limit (\d+) records").unwrap());

/// Sort, limit, and grouping modifiers detected on a question.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Modifiers {
    pub(crate) sort: Option<SortSpec>,
    pub(crate) limit: Option<u64>,
    pub(crate) group: Option<GroupSpec>,
}

/// Detect sort direction, explicit result limit, and group-by request.
///
/// The two sort phrases are detected independently; if both somehow
/// appear, the later check wins. An explicit limit must be positive;
/// `limit 0 records` is treated like a malformed literal and omitted.
pub(crate) fn extract(text: &str) -> Modifiers {
    let mut modifiers = Modifiers::default();

    if text.contains("ascending price") {
        modifiers.sort = Some(SortSpec::ascending());
    }
    if text.contains("descending price") {
        modifiers.sort = Some(SortSpec::descending());
    }

    modifiers.limit = LIMIT
        .captures(text)
        .and_then(|caps| caps[1].parse::<u64>().ok())
        .filter(|n| *n > 0);

    modifiers.group = detect_group(text);

    modifiers
}

fn detect_group(text: &str) -> Option<GroupSpec> {
    let field = if text.contains("group by main category") {
        GroupField::MainCategory
    } else if text.contains("group by category") {
        GroupField::SubCategory
    } else {
        return None;
    };

    // "average rating" and "total number" select the aggregate; a group
    // request with neither phrase counts.
    let aggregate = if text.contains("average rating") {
        Aggregate::AverageRating
    } else {
        Aggregate::Count
    };

    Some(GroupSpec { field, aggregate })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shopquery_core::intent::Direction;

    #[test]
    fn sort_directions() {
        assert_eq!(
            extract("show me appliances in ascending price").sort,
            Some(SortSpec::ascending())
        );
        assert_eq!(
            extract("show me appliances in descending price").sort,
            Some(SortSpec::descending())
        );
        assert_eq!(extract("show me appliances").sort, None);
    }

    #[test]
    fn later_sort_check_wins_when_both_phrases_appear() {
        let modifiers = extract("show me appliances in ascending price then descending price");
        assert_eq!(modifiers.sort.unwrap().direction, Direction::Desc);
    }

    #[test]
    fn explicit_limit() {
        assert_eq!(extract("show me appliances limit 10 records").limit, Some(10));
        assert_eq!(extract("show me appliances").limit, None);
        assert_eq!(extract("show me appliances limit 0 records").limit, None);
    }

    #[test]
    fn group_by_category_counts_by_default() {
        let group = extract("show total number of appliances group by category")
            .group
            .unwrap();
        assert_eq!(group.field, GroupField::SubCategory);
        assert_eq!(group.aggregate, Aggregate::Count);
    }

    #[test]
    fn group_by_main_category() {
        let group = extract("show total number of appliances group by main category")
            .group
            .unwrap();
        assert_eq!(group.field, GroupField::MainCategory);
    }

    #[test]
    fn average_rating_selects_the_avg_aggregate() {
        let group = extract("show average rating for appliances group by category")
            .group
            .unwrap();
        assert_eq!(group.aggregate, Aggregate::AverageRating);
    }
}
