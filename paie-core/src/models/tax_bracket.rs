use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of a progressive rate table, covering the half-open income
/// interval `(lower, upper]`. `upper == None` marks the unbounded top slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub label: String,
    pub lower: Decimal,
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        label: impl Into<String>,
        lower: Decimal,
        upper: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self {
            label: label.into(),
            lower,
            upper,
            rate,
        }
    }
}
