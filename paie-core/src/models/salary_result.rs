use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Country, FamilyProfile};

/// One social-contribution line, employee or employer side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionLine {
    /// Name of the scheme (pension, family benefits, ...).
    pub label: String,

    /// Rate applied, as a fraction.
    pub rate: Decimal,

    /// Base the rate was applied to, after the ceiling.
    pub base: Decimal,

    /// Rounded amount due.
    pub amount: Decimal,
}

/// One slice of the progressive income tax breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketLine {
    /// Tranche label from the rate table.
    pub label: String,

    /// Marginal rate of the tranche, as a fraction.
    pub rate: Decimal,

    /// Rounded tax amount owed on this tranche.
    pub amount: Decimal,
}

/// Complete outcome of one payroll calculation.
///
/// This shape is the contract downstream consumers (reporting, charts, CLI
/// output) bind to; it is identical for both jurisdictions and for both
/// calculation directions. Created fresh per call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// Jurisdiction the rules came from.
    pub country: Country,

    /// Total gross salary, all components summed.
    pub total_gross: Decimal,

    /// Sum of employee social contributions withheld.
    pub employee_contributions: Decimal,

    /// Per-scheme employee contribution detail.
    pub employee_breakdown: Vec<ContributionLine>,

    /// Professional-expense deduction applied to the tax base.
    pub professional_expenses: Decimal,

    /// Taxable base after contributions and the expense deduction.
    pub taxable_base: Decimal,

    /// Income tax due (ITS in Bénin, IRPP in Togo), after the minimum-tax
    /// floor when the jurisdiction has one.
    pub income_tax: Decimal,

    /// Per-tranche income tax detail.
    pub tax_breakdown: Vec<BracketLine>,

    /// Take-home pay: gross minus employee contributions minus income tax.
    pub net_salary: Decimal,

    /// Sum of employer-side charges.
    pub employer_contributions: Decimal,

    /// Per-scheme employer charge detail.
    pub employer_breakdown: Vec<ContributionLine>,

    /// Gross salary plus employer charges.
    pub total_employer_cost: Decimal,

    /// Family situation, echoed from the request (not applied to any rule).
    pub family: FamilyProfile,
}
