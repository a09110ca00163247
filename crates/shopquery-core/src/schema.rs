mod catalog;
pub use catalog::{Catalog, CategoryDef};

mod synonyms;
pub use synonyms::Synonyms;
