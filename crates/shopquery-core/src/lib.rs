mod error;
pub use error::Error;

pub mod intent;
pub use intent::QueryIntent;

pub mod schema;
pub use schema::Catalog;

/// A Result type alias that uses Shopquery's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
