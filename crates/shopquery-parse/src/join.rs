use shopquery_core::{
    intent::{Category, JoinKind, JoinSpec},
    schema::Catalog,
    Error, Result,
};

/// Two-table join trigger phrases, scanned in table order. The first
/// trigger present ends the scan whether or not a target is found.
const JOIN_TRIGGERS: &[(&str, JoinKind)] = &[
    ("related to", JoinKind::Inner),
    ("matching", JoinKind::Inner),
    ("combined with", JoinKind::Inner),
    ("including", JoinKind::Left),
    ("along with", JoinKind::Left),
    ("with all", JoinKind::Left),
];

/// Detect join phrasing on a normalized question.
///
/// The three-table check runs first and is mutually exclusive with
/// two-table detection: "together with" signals three-table intent, and
/// from there the question must also say "connected to" and name exactly
/// two distinct categories besides the primary one, or the parse fails
/// with an invalid-arity error.
pub(crate) fn detect(
    text: &str,
    primary: Category,
    catalog: &Catalog,
) -> Result<Option<JoinSpec>> {
    if text.contains("together with") {
        return detect_three_table(text, primary, catalog).map(Some);
    }

    Ok(detect_two_table(text, primary, catalog))
}

fn detect_three_table(text: &str, primary: Category, catalog: &Catalog) -> Result<JoinSpec> {
    // Collected in catalog-declaration order.
    let targets: Vec<Category> = catalog
        .entries()
        .iter()
        .filter(|entry| entry.category != primary && text.contains(entry.phrase))
        .map(|entry| entry.category)
        .collect();

    if !text.contains("connected to") || targets.len() != 2 {
        return Err(Error::invalid_join_arity(targets.len()));
    }

    Ok(JoinSpec::three(targets[0], targets[1]))
}

fn detect_two_table(text: &str, primary: Category, catalog: &Catalog) -> Option<JoinSpec> {
    let (_, kind) = JOIN_TRIGGERS
        .iter()
        .find(|(trigger, _)| text.contains(trigger))?;

    let target = catalog
        .entries()
        .iter()
        .find(|entry| entry.category != primary && text.contains(entry.phrase))?;

    Some(JoinSpec::two(target.category, *kind))
}
