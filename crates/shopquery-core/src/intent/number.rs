use serde::Serialize;
use std::fmt;

/// A numeric literal captured from a condition phrase.
///
/// Comment counts are integer-only; rating and price thresholds accept
/// decimals. The distinction is preserved so compilers can render the
/// literal exactly as it will be compared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Number {
    Int(u64),
    Decimal(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Decimal(v) => v,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => v.fmt(f),
            Number::Decimal(v) => v.fmt(f),
        }
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Decimal(value)
    }
}
