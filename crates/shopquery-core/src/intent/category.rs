use serde::Serialize;

/// One of the fixed product-domain entities the system can query.
///
/// The set is closed: each variant maps 1:1 to a backend table or
/// collection via the [`Catalog`](crate::schema::Catalog). Resolved once
/// per question and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Appliances,
    AirConditioners,
    CarAndMotorbikeProducts,
}
