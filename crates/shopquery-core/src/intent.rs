mod category;
pub use category::Category;

mod field;
pub use field::Field;

mod group;
pub use group::{Aggregate, GroupField, GroupSpec};

mod join;
pub use join::{JoinArity, JoinKind, JoinSpec};

mod number;
pub use number::Number;

mod predicate;
pub use predicate::{Comparison, Predicate};

mod query_intent;
pub use query_intent::QueryIntent;

mod sort;
pub use sort::{Direction, SortSpec};
