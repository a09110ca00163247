use once_cell::sync::Lazy;
use regex::Regex;
use shopquery_core::intent::{Field, Number, Predicate};

static RATING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"rating greater than (\d+\.?\d*)").unwrap());
static COMMENTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"comments greater than (\d+)").unwrap());
static PRICE_GT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"price greater than (\d+\.?\d*)").unwrap());
static PRICE_BETWEEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"price between (\d+\.?\d*) and (\d+\.?\d*)").unwrap());

/// Extract the condition predicates of a normalized question.
///
/// Each condition family is matched independently; a question may yield
/// zero to four predicates, combined downstream with AND. A condition
/// phrase with a malformed numeric token simply does not match its
/// pattern, so the predicate is omitted rather than failing the parse.
pub(crate) fn extract(text: &str) -> Vec<Predicate> {
    let mut predicates = Vec::new();

    if let Some(value) = capture_decimal(&RATING, text) {
        predicates.push(Predicate::greater_than(Field::Rating, value));
    }

    if let Some(caps) = COMMENTS.captures(text) {
        if let Ok(value) = caps[1].parse::<u64>() {
            predicates.push(Predicate::greater_than(Field::CommentCount, value));
        }
    }

    if let Some(value) = capture_decimal(&PRICE_GT, text) {
        predicates.push(Predicate::greater_than(Field::Price, value));
    }

    if let Some(caps) = PRICE_BETWEEN.captures(text) {
        if let (Ok(lo), Ok(hi)) = (caps[1].parse::<f64>(), caps[2].parse::<f64>()) {
            predicates.push(Predicate::between(Field::Price, lo, hi));
        }
    }

    predicates
}

fn capture_decimal(pattern: &Regex, text: &str) -> Option<Number> {
    let caps = pattern.captures(text)?;
    caps[1].parse::<f64>().ok().map(Number::Decimal)
}
