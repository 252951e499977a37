use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Country, TaxBracket};

/// Errors raised when a rule set violates its structural invariants.
///
/// These are configuration defects, not runtime input errors: they are
/// detected once when the rules are loaded, never per calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("bracket table is empty")]
    EmptyBrackets,

    #[error("bracket table must start at zero, got {0}")]
    FirstBracketNotZero(Decimal),

    #[error("bracket '{label}' must start at {expected} where the previous one ends, got {found}")]
    DiscontinuousBrackets {
        label: String,
        expected: Decimal,
        found: Decimal,
    },

    #[error("bracket '{0}' upper bound {1} is not above its lower bound {2}")]
    EmptyBracketSlice(String, Decimal, Decimal),

    #[error("only the last bracket may be unbounded")]
    UnboundedInnerBracket(String),

    #[error("last bracket '{0}' must be unbounded")]
    BoundedLastBracket(String),

    #[error("bracket '{0}' rate must be between 0 and 1, got {1}")]
    InvalidBracketRate(String, Decimal),

    #[error("contribution scheme '{0}' rate must be between 0 and 1, got {1}")]
    InvalidContributionRate(String, Decimal),

    #[error("contribution scheme '{0}' ceiling must be positive, got {1}")]
    InvalidContributionCeiling(String, Decimal),

    #[error("professional expense rate must be between 0 and 1, got {0}")]
    InvalidExpenseRate(Decimal),

    #[error("professional expense cap must be positive, got {0}")]
    InvalidExpenseCap(Decimal),

    #[error("minimum tax must be positive, got {0}")]
    InvalidMinimumTax(Decimal),

    #[error("net-to-gross seed ratio must be between 0 and 1, got {0}")]
    InvalidSeedRatio(Decimal),
}

/// A named social-contribution sub-rate with an optional monthly ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionScheme {
    pub label: String,
    pub rate: Decimal,
    pub ceiling: Option<Decimal>,
}

impl ContributionScheme {
    pub fn new(
        label: impl Into<String>,
        rate: Decimal,
        ceiling: Option<Decimal>,
    ) -> Self {
        Self {
            label: label.into(),
            rate,
            ceiling,
        }
    }
}

/// Base the professional-expense deduction is computed from.
///
/// Bénin applies the flat rate to gross minus employee contributions; Togo
/// applies it to total gross. The legacy implementations disagreed on the
/// Togo formula; the variant kept here reproduces the official IRPP figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseBasis {
    GrossSalary,
    AfterContributions,
}

/// Immutable payroll constants for one jurisdiction.
///
/// Loaded once (the built-in tables, or a caller-supplied set validated by
/// [`CountryRules::validate`]) and shared read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRules {
    pub country: Country,

    /// Employee-withheld contribution schemes.
    pub employee_schemes: Vec<ContributionScheme>,

    /// Employer-paid contribution schemes.
    pub employer_schemes: Vec<ContributionScheme>,

    /// Flat professional-expense rate, as a fraction. Zero for a
    /// jurisdiction without the concept.
    pub expense_rate: Decimal,

    /// Monthly cap on the professional-expense deduction, if any.
    pub expense_cap: Option<Decimal>,

    /// Base the expense rate applies to.
    pub expense_basis: ExpenseBasis,

    /// Progressive income tax tranches, ascending and contiguous.
    pub brackets: Vec<TaxBracket>,

    /// Minimum forfeitary tax charged when the bracket tax falls below it
    /// on a positive taxable base.
    pub minimum_tax: Option<Decimal>,

    /// Rough net-to-gross ratio used to seed the inverse solver.
    pub seed_net_ratio: Decimal,
}

impl CountryRules {
    /// The built-in rule set for a jurisdiction.
    pub fn for_country(country: Country) -> Self {
        match country {
            Country::Benin => Self::benin(),
            Country::Togo => Self::togo(),
        }
    }

    /// Bénin: CNSS employee pension 3.6 %, ITS monthly tranches, 20 %
    /// professional expenses on gross minus contributions.
    pub fn benin() -> Self {
        Self {
            country: Country::Benin,
            employee_schemes: vec![ContributionScheme::new("CNSS pension", dec!(0.036), None)],
            employer_schemes: vec![
                ContributionScheme::new("CNSS pension", dec!(0.064), None),
                ContributionScheme::new("Family benefits", dec!(0.09), None),
                ContributionScheme::new("Workplace accident", dec!(0.02), None),
            ],
            expense_rate: dec!(0.20),
            expense_cap: None,
            expense_basis: ExpenseBasis::AfterContributions,
            brackets: vec![
                TaxBracket::new("0 - 60 000", dec!(0), Some(dec!(60000)), dec!(0)),
                TaxBracket::new("60 000 - 150 000", dec!(60000), Some(dec!(150000)), dec!(0.10)),
                TaxBracket::new("150 000 - 250 000", dec!(150000), Some(dec!(250000)), dec!(0.15)),
                TaxBracket::new("250 000 - 500 000", dec!(250000), Some(dec!(500000)), dec!(0.19)),
                TaxBracket::new("over 500 000", dec!(500000), None, dec!(0.30)),
            ],
            minimum_tax: None,
            seed_net_ratio: dec!(0.76),
        }
    }

    /// Togo: CNSS employee 9.68 %, IRPP monthly tranches, 20 % professional
    /// expenses on total gross capped at 84 334, minimum tax of 3 000.
    pub fn togo() -> Self {
        Self {
            country: Country::Togo,
            employee_schemes: vec![ContributionScheme::new("CNSS", dec!(0.0968), None)],
            employer_schemes: vec![
                ContributionScheme::new("CNSS pension", dec!(0.125), None),
                ContributionScheme::new("Family benefits", dec!(0.03), None),
                ContributionScheme::new("Workplace accident", dec!(0.02), None),
            ],
            expense_rate: dec!(0.20),
            expense_cap: Some(dec!(84334)),
            expense_basis: ExpenseBasis::GrossSalary,
            brackets: vec![
                TaxBracket::new("0 - 60 000", dec!(0), Some(dec!(60000)), dec!(0)),
                TaxBracket::new("60 000 - 150 000", dec!(60000), Some(dec!(150000)), dec!(0.10)),
                TaxBracket::new("150 000 - 300 000", dec!(150000), Some(dec!(300000)), dec!(0.15)),
                TaxBracket::new("300 000 - 500 000", dec!(300000), Some(dec!(500000)), dec!(0.20)),
                TaxBracket::new("500 000 - 800 000", dec!(500000), Some(dec!(800000)), dec!(0.25)),
                TaxBracket::new("over 800 000", dec!(800000), None, dec!(0.30)),
            ],
            minimum_tax: Some(dec!(3000)),
            seed_net_ratio: dec!(0.70),
        }
    }

    /// Checks every structural invariant of the rule set.
    ///
    /// Must be run when rules are loaded; calculators only accept rule sets
    /// that passed it.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if:
    /// - the bracket table is empty, gapped, overlapping, unsorted, has an
    ///   unbounded inner tranche or a bounded last tranche
    /// - any bracket or contribution rate is outside `[0, 1]`
    /// - any ceiling, cap or minimum tax is not positive
    /// - the solver seed ratio is outside `(0, 1]`
    pub fn validate(&self) -> Result<(), RulesError> {
        self.validate_brackets()?;

        for scheme in self.employee_schemes.iter().chain(&self.employer_schemes) {
            if scheme.rate < Decimal::ZERO || scheme.rate > Decimal::ONE {
                return Err(RulesError::InvalidContributionRate(
                    scheme.label.clone(),
                    scheme.rate,
                ));
            }
            if let Some(ceiling) = scheme.ceiling {
                if ceiling <= Decimal::ZERO {
                    return Err(RulesError::InvalidContributionCeiling(
                        scheme.label.clone(),
                        ceiling,
                    ));
                }
            }
        }

        if self.expense_rate < Decimal::ZERO || self.expense_rate > Decimal::ONE {
            return Err(RulesError::InvalidExpenseRate(self.expense_rate));
        }
        if let Some(cap) = self.expense_cap {
            if cap <= Decimal::ZERO {
                return Err(RulesError::InvalidExpenseCap(cap));
            }
        }
        if let Some(minimum) = self.minimum_tax {
            if minimum <= Decimal::ZERO {
                return Err(RulesError::InvalidMinimumTax(minimum));
            }
        }
        if self.seed_net_ratio <= Decimal::ZERO || self.seed_net_ratio > Decimal::ONE {
            return Err(RulesError::InvalidSeedRatio(self.seed_net_ratio));
        }

        Ok(())
    }

    fn validate_brackets(&self) -> Result<(), RulesError> {
        let Some(first) = self.brackets.first() else {
            return Err(RulesError::EmptyBrackets);
        };
        if first.lower != Decimal::ZERO {
            return Err(RulesError::FirstBracketNotZero(first.lower));
        }

        let mut expected_lower = Decimal::ZERO;
        let last_index = self.brackets.len() - 1;
        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(RulesError::InvalidBracketRate(
                    bracket.label.clone(),
                    bracket.rate,
                ));
            }
            if bracket.lower != expected_lower {
                return Err(RulesError::DiscontinuousBrackets {
                    label: bracket.label.clone(),
                    expected: expected_lower,
                    found: bracket.lower,
                });
            }
            match bracket.upper {
                Some(upper) => {
                    if index == last_index {
                        return Err(RulesError::BoundedLastBracket(bracket.label.clone()));
                    }
                    if upper <= bracket.lower {
                        return Err(RulesError::EmptyBracketSlice(
                            bracket.label.clone(),
                            upper,
                            bracket.lower,
                        ));
                    }
                    expected_lower = upper;
                }
                None => {
                    if index != last_index {
                        return Err(RulesError::UnboundedInnerBracket(bracket.label.clone()));
                    }
                }
            }
        }

        Ok(())
    }
}
