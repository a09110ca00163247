mod category;
mod join;
mod modifier;
mod normalize;
mod parser;
mod predicate;

pub use parser::Parser;
