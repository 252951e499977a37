//! Progressive bracket tax evaluation.
//!
//! Both jurisdictions compute income tax by slicing the taxable base across
//! ascending marginal tranches and rounding the tax owed *per tranche* to
//! the franc. The evaluator therefore reports the total as the sum of the
//! rounded tranche amounts, never as a post-hoc rounding of the raw sum:
//! the two can differ by a franc, and the statutory figure is the former.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paie_core::calculations::BracketSchedule;
//! use paie_core::models::CountryRules;
//!
//! let rules = CountryRules::benin();
//! let outcome = BracketSchedule::new(&rules.brackets).evaluate(dec!(325192));
//!
//! // 0 + 9 000 + 15 000 + 14 286 across the four tranches reached
//! assert_eq!(outcome.total, dec!(38286));
//! assert_eq!(outcome.lines.len(), 4);
//! assert_eq!(outcome.lines[3].amount, dec!(14286));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_to_franc;
use crate::models::{BracketLine, TaxBracket};

/// Result of evaluating a taxable base against a bracket table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTaxOutcome {
    /// Sum of the rounded per-tranche amounts.
    pub total: Decimal,

    /// One line per tranche the base reaches, in ascending order.
    pub lines: Vec<BracketLine>,
}

/// Evaluator for one jurisdiction's progressive rate table.
///
/// The table must satisfy the invariants enforced by
/// [`CountryRules::validate`](crate::models::CountryRules::validate):
/// contiguous, ascending, last tranche unbounded.
#[derive(Debug, Clone)]
pub struct BracketSchedule<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> BracketSchedule<'a> {
    pub fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    /// Evaluates the tax owed on `taxable_base`.
    ///
    /// A negative base is clamped to zero. A tranche contributes only once
    /// the base exceeds its lower bound, so a base sitting exactly on a
    /// boundary is taxed entirely in the lower tranche. A zero base yields
    /// a zero total and an empty breakdown.
    pub fn evaluate(
        &self,
        taxable_base: Decimal,
    ) -> BracketTaxOutcome {
        let base = taxable_base.max(Decimal::ZERO);
        let mut total = Decimal::ZERO;
        let mut lines = Vec::new();

        for bracket in self.brackets {
            if base <= bracket.lower {
                break;
            }

            let reach = match bracket.upper {
                Some(upper) => base.min(upper),
                None => base,
            };
            let slice = reach - bracket.lower;
            let amount = round_to_franc(slice * bracket.rate);
            total += amount;
            lines.push(BracketLine {
                label: bracket.label.clone(),
                rate: bracket.rate,
                amount,
            });
        }

        BracketTaxOutcome { total, lines }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::CountryRules;

    fn benin_brackets() -> Vec<TaxBracket> {
        CountryRules::benin().brackets
    }

    fn togo_brackets() -> Vec<TaxBracket> {
        CountryRules::togo().brackets
    }

    // =========================================================================
    // basic evaluation
    // =========================================================================

    #[test]
    fn evaluate_returns_zero_total_and_empty_lines_for_zero_base() {
        let brackets = benin_brackets();
        let schedule = BracketSchedule::new(&brackets);

        let outcome = schedule.evaluate(dec!(0));

        assert_eq!(outcome.total, dec!(0));
        assert_eq!(outcome.lines, vec![]);
    }

    #[test]
    fn evaluate_clamps_negative_base_to_zero() {
        let brackets = togo_brackets();
        let schedule = BracketSchedule::new(&brackets);

        let outcome = schedule.evaluate(dec!(-5000));

        assert_eq!(outcome.total, dec!(0));
        assert_eq!(outcome.lines, vec![]);
    }

    #[test]
    fn evaluate_base_inside_free_tranche_owes_nothing() {
        let brackets = benin_brackets();
        let schedule = BracketSchedule::new(&brackets);

        let outcome = schedule.evaluate(dec!(45000));

        assert_eq!(outcome.total, dec!(0));
        assert_eq!(outcome.lines.len(), 1);
        assert_eq!(outcome.lines[0].amount, dec!(0));
    }

    // =========================================================================
    // boundary behaviour
    // =========================================================================

    #[test]
    fn evaluate_boundary_base_does_not_leak_into_next_tranche() {
        let brackets = benin_brackets();
        let schedule = BracketSchedule::new(&brackets);

        // 150 000 sits exactly on the 10 % / 15 % boundary: the whole
        // 90 000 above the free tranche is taxed at 10 %.
        let outcome = schedule.evaluate(dec!(150000));

        assert_eq!(outcome.total, dec!(9000));
        assert_eq!(outcome.lines.len(), 2);
        assert_eq!(outcome.lines[1].rate, dec!(0.10));
    }

    #[test]
    fn evaluate_one_franc_above_boundary_enters_next_tranche() {
        let brackets = benin_brackets();
        let schedule = BracketSchedule::new(&brackets);

        let outcome = schedule.evaluate(dec!(150001));

        // 9 000 from the 10 % tranche plus round(1 × 0.15) = 0
        assert_eq!(outcome.total, dec!(9000));
        assert_eq!(outcome.lines.len(), 3);
        assert_eq!(outcome.lines[2].rate, dec!(0.15));
    }

    // =========================================================================
    // per-tranche rounding
    // =========================================================================

    #[test]
    fn evaluate_rounds_each_tranche_amount() {
        let brackets = benin_brackets();
        let schedule = BracketSchedule::new(&brackets);

        // Top reached tranche: (325 192 − 250 000) × 0.19 = 14 286.48 → 14 286
        let outcome = schedule.evaluate(dec!(325192));

        assert_eq!(outcome.lines[3].amount, dec!(14286));
        assert_eq!(outcome.total, dec!(38286));
    }

    #[test]
    fn evaluate_total_is_sum_of_rounded_lines() {
        let brackets = togo_brackets();
        let schedule = BracketSchedule::new(&brackets);

        let outcome = schedule.evaluate(dec!(210960));

        let summed: Decimal = outcome.lines.iter().map(|line| line.amount).sum();
        assert_eq!(outcome.total, summed);
        assert_eq!(outcome.total, dec!(18144));
    }

    // =========================================================================
    // unbounded top tranche
    // =========================================================================

    #[test]
    fn evaluate_reaches_unbounded_top_tranche() {
        let brackets = benin_brackets();
        let schedule = BracketSchedule::new(&brackets);

        let outcome = schedule.evaluate(dec!(600000));

        // 0 + 9 000 + 15 000 + 47 500 + 30 000
        assert_eq!(outcome.total, dec!(101500));
        assert_eq!(outcome.lines.len(), 5);
        assert_eq!(outcome.lines[4].amount, dec!(30000));
    }
}
