use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly remuneration split into its additive components.
///
/// The sum of all components is the total gross salary. Amounts are in
/// FCFA; negative values are clamped to zero by [`SalaryComponents::sanitized`]
/// before any calculation uses them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponents {
    /// Contractual base salary.
    pub base_salary: Decimal,

    /// Transport bonus.
    pub transport_bonus: Decimal,

    /// Housing bonus.
    pub housing_bonus: Decimal,

    /// Benefits in kind (company car, meals, lodging provided in nature).
    pub in_kind_benefits: Decimal,

    /// Performance bonus.
    pub performance_bonus: Decimal,

    /// One-off exceptional bonus.
    pub exceptional_bonus: Decimal,
}

impl SalaryComponents {
    /// Components consisting of a base salary and nothing else.
    pub fn from_base(base_salary: Decimal) -> Self {
        Self {
            base_salary,
            ..Self::default()
        }
    }

    /// Returns a copy with the base salary replaced and every bonus kept.
    pub fn with_base(&self, base_salary: Decimal) -> Self {
        Self {
            base_salary,
            ..self.clone()
        }
    }

    /// Total gross salary: the sum of every component.
    pub fn total(&self) -> Decimal {
        self.base_salary
            + self.transport_bonus
            + self.housing_bonus
            + self.in_kind_benefits
            + self.performance_bonus
            + self.exceptional_bonus
    }

    /// Returns a copy with every negative component clamped to zero.
    pub fn sanitized(&self) -> Self {
        let clamp = |v: Decimal| v.max(Decimal::ZERO);
        Self {
            base_salary: clamp(self.base_salary),
            transport_bonus: clamp(self.transport_bonus),
            housing_bonus: clamp(self.housing_bonus),
            in_kind_benefits: clamp(self.in_kind_benefits),
            performance_bonus: clamp(self.performance_bonus),
            exceptional_bonus: clamp(self.exceptional_bonus),
        }
    }
}
