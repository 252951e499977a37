//! Forward gross→net payroll calculation.
//!
//! This module composes the full statutory deduction pipeline for one
//! jurisdiction. The order is fixed; only the constants differ per country:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Sum the sanitized salary components into the total gross |
//! | 2    | Employee contributions, per scheme against `min(gross, ceiling)` |
//! | 3    | Professional-expense deduction (flat rate on the jurisdiction's basis, capped) |
//! | 4    | Taxable base = gross − contributions − expenses, clamped at zero |
//! | 5    | Progressive bracket tax on the taxable base |
//! | 6    | Minimum-tax floor override when the jurisdiction has one |
//! | 7    | Net = gross − employee contributions − tax |
//! | 8    | Employer charges, per scheme, and total employer cost |
//!
//! The calculation is pure and total: malformed amounts are clamped at the
//! boundary and no step can fail. For a fixed jurisdiction and bonus
//! structure the net is monotonically non-decreasing in the gross, which is
//! what the inverse solver relies on.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paie_core::calculations::NetSalaryCalculator;
//! use paie_core::models::{Country, FamilyProfile, SalaryComponents};
//!
//! let calculator = NetSalaryCalculator::for_country(Country::Benin);
//! let result = calculator.compute(
//!     &SalaryComponents::from_base(dec!(421670)),
//!     &FamilyProfile::default(),
//! );
//!
//! assert_eq!(result.employee_contributions, dec!(15180));
//! assert_eq!(result.professional_expenses, dec!(81298));
//! assert_eq!(result.taxable_base, dec!(325192));
//! assert_eq!(result.income_tax, dec!(38286));
//! assert_eq!(result.net_salary, dec!(368204));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::bracket_tax::BracketSchedule;
use crate::calculations::common::round_to_franc;
use crate::models::{
    ContributionLine, ContributionScheme, Country, CountryRules, ExpenseBasis, FamilyProfile,
    RulesError, SalaryComponents, SalaryResult,
};

/// Calculator for the forward gross→net pipeline of one jurisdiction.
///
/// Holds a validated, immutable rule set; safe to share across threads and
/// reuse for any number of calculations.
#[derive(Debug, Clone)]
pub struct NetSalaryCalculator {
    rules: CountryRules,
}

impl NetSalaryCalculator {
    /// Creates a calculator from a caller-supplied rule set.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if the rule set violates a structural
    /// invariant; rule defects are rejected here, once, so that
    /// [`NetSalaryCalculator::compute`] can stay total.
    pub fn new(rules: CountryRules) -> Result<Self, RulesError> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Creates a calculator for a built-in jurisdiction.
    ///
    /// The built-in tables are covered by validation tests, so this
    /// constructor is infallible.
    pub fn for_country(country: Country) -> Self {
        Self {
            rules: CountryRules::for_country(country),
        }
    }

    /// The rule set this calculator applies.
    pub fn rules(&self) -> &CountryRules {
        &self.rules
    }

    /// Runs the full deduction pipeline on the given components.
    ///
    /// Negative components are clamped to zero before anything else. The
    /// family profile is echoed in the result and applied to no rule (see
    /// [`FamilyProfile`]).
    pub fn compute(
        &self,
        components: &SalaryComponents,
        family: &FamilyProfile,
    ) -> SalaryResult {
        let components = components.sanitized();
        let total_gross = components.total();

        let (employee_contributions, employee_breakdown) =
            self.contributions(&self.rules.employee_schemes, total_gross);

        let professional_expenses =
            self.professional_expenses(total_gross, employee_contributions);

        let taxable_base =
            (total_gross - employee_contributions - professional_expenses).max(Decimal::ZERO);

        let evaluated = BracketSchedule::new(&self.rules.brackets).evaluate(taxable_base);
        let income_tax = self.apply_minimum_tax(evaluated.total, taxable_base);

        let net_salary = total_gross - employee_contributions - income_tax;

        let (employer_contributions, employer_breakdown) =
            self.contributions(&self.rules.employer_schemes, total_gross);
        let total_employer_cost = total_gross + employer_contributions;

        debug!(
            country = self.rules.country.as_str(),
            %total_gross,
            %taxable_base,
            %income_tax,
            %net_salary,
            "computed payslip"
        );

        SalaryResult {
            country: self.rules.country,
            total_gross,
            employee_contributions,
            employee_breakdown,
            professional_expenses,
            taxable_base,
            income_tax,
            tax_breakdown: evaluated.lines,
            net_salary,
            employer_contributions,
            employer_breakdown,
            total_employer_cost,
            family: *family,
        }
    }

    /// Applies each scheme's rate to the ceiling-capped gross and rounds
    /// per scheme.
    fn contributions(
        &self,
        schemes: &[ContributionScheme],
        total_gross: Decimal,
    ) -> (Decimal, Vec<ContributionLine>) {
        let mut total = Decimal::ZERO;
        let mut lines = Vec::with_capacity(schemes.len());

        for scheme in schemes {
            let base = match scheme.ceiling {
                Some(ceiling) => total_gross.min(ceiling),
                None => total_gross,
            };
            let amount = round_to_franc(base * scheme.rate);
            total += amount;
            lines.push(ContributionLine {
                label: scheme.label.clone(),
                rate: scheme.rate,
                base,
                amount,
            });
        }

        (total, lines)
    }

    /// Flat-rate professional-expense deduction on the jurisdiction's basis,
    /// bounded by the monthly cap.
    fn professional_expenses(
        &self,
        total_gross: Decimal,
        employee_contributions: Decimal,
    ) -> Decimal {
        let basis = match self.rules.expense_basis {
            ExpenseBasis::GrossSalary => total_gross,
            ExpenseBasis::AfterContributions => total_gross - employee_contributions,
        };
        let deduction = round_to_franc(basis * self.rules.expense_rate);
        match self.rules.expense_cap {
            Some(cap) => deduction.min(cap),
            None => deduction,
        }
    }

    /// Forces the minimum forfeitary tax when the bracket tax falls below
    /// it on a positive taxable base.
    fn apply_minimum_tax(
        &self,
        tax: Decimal,
        taxable_base: Decimal,
    ) -> Decimal {
        match self.rules.minimum_tax {
            Some(floor) if taxable_base > Decimal::ZERO && tax < floor => floor,
            _ => tax,
        }
    }
}
