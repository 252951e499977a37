//! Inverse solver: find the base salary that yields a target net.
//!
//! The forward pipeline is monotonic in the base salary but not smooth
//! (per-line rounding and the bracket table introduce franc-sized plateaus
//! and kinks), so the solver bisects rather than iterating a fixed point.
//! It seeds an upper bound from the jurisdiction's typical net/gross ratio,
//! doubles the bound until the net at that base covers the target, then
//! halves the interval down to one franc of width. The interval endpoints
//! stay on whole francs throughout, so the answer is the smallest base
//! whose net reaches the target, never a neighbour off by a rounding
//! artefact.
//!
//! Because net moves in franc steps, several adjacent bases can share a
//! net. The solver reports the base it lands on together with the net that
//! base actually achieves, and flags the solution as converged only when
//! the achieved net is within one franc of the target.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paie_core::calculations::{GrossSolver, NetSalaryCalculator};
//! use paie_core::models::{Country, FamilyProfile, SalaryComponents};
//!
//! let calculator = NetSalaryCalculator::for_country(Country::Benin);
//! let solver = GrossSolver::new(&calculator);
//!
//! let solution = solver.solve(
//!     dec!(368204),
//!     &SalaryComponents::default(),
//!     &FamilyProfile::default(),
//! );
//!
//! assert!(solution.converged);
//! assert_eq!(solution.achieved_net, dec!(368204));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::gross_to_net::NetSalaryCalculator;
use crate::models::{FamilyProfile, SalaryComponents};

/// Hard cap on bisection steps. One-franc precision on any realistic
/// salary is reached in well under 64 halvings, so hitting this cap means
/// the target is unreachable rather than the interval too wide.
pub const MAX_ITERATIONS: u32 = 500;

/// Cap on bound-doubling steps while searching for an upper bracket.
const MAX_DOUBLINGS: u32 = 64;

/// Result of an inverse solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossSolution {
    /// Base salary the solver settled on, rounded to the franc.
    pub base_salary: Decimal,

    /// Net actually produced by running `base_salary` forward.
    pub achieved_net: Decimal,

    /// Bisection steps spent (doubling steps excluded).
    pub iterations: u32,

    /// Whether `achieved_net` is within one franc of the target.
    pub converged: bool,
}

/// Bisection solver over a forward calculator.
///
/// Bonuses and benefits are held fixed while only the base salary varies,
/// which mirrors how the question is asked in practice: the employer has
/// promised a net and the allowances are already set.
#[derive(Debug, Clone)]
pub struct GrossSolver<'a> {
    calculator: &'a NetSalaryCalculator,
}

impl<'a> GrossSolver<'a> {
    pub fn new(calculator: &'a NetSalaryCalculator) -> Self {
        Self { calculator }
    }

    /// Finds the base salary whose net is `target_net`, holding the bonus
    /// fields of `fixed_components` constant.
    ///
    /// A negative target is clamped to zero. If the fixed bonuses alone
    /// already net the target or more, the solver returns a zero base with
    /// `converged` reflecting how close that best effort lands.
    pub fn solve(
        &self,
        target_net: Decimal,
        fixed_components: &SalaryComponents,
        family: &FamilyProfile,
    ) -> GrossSolution {
        let target = target_net.max(Decimal::ZERO);

        let net_at = |base: Decimal| {
            self.calculator
                .compute(&fixed_components.with_base(base), family)
                .net_salary
        };

        let floor_net = net_at(Decimal::ZERO);
        if floor_net >= target {
            return self.finish(Decimal::ZERO, floor_net, target, 0);
        }

        // Seed the upper bound from the jurisdiction's net/gross ratio and
        // double until the net at that base covers the target.
        let mut hi = (target / self.calculator.rules().seed_net_ratio)
            .max(Decimal::ONE)
            .ceil();
        let mut doublings = 0;
        while net_at(hi) < target {
            doublings += 1;
            if doublings > MAX_DOUBLINGS {
                let achieved = net_at(hi);
                warn!(
                    %target,
                    %hi,
                    "no base salary reaches the target net, returning upper bound"
                );
                return self.finish(hi, achieved, target, 0);
            }
            hi *= Decimal::TWO;
        }

        // Invariant: net(lo) < target <= net(hi), both bounds whole francs.
        let mut lo = Decimal::ZERO;
        let mut iterations = 0;
        while hi - lo > Decimal::ONE && iterations < MAX_ITERATIONS {
            iterations += 1;
            let mid = ((lo + hi) / Decimal::TWO).floor();
            if net_at(mid) < target {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        let achieved = net_at(hi);
        self.finish(hi, achieved, target, iterations)
    }

    fn finish(
        &self,
        base_salary: Decimal,
        achieved_net: Decimal,
        target: Decimal,
        iterations: u32,
    ) -> GrossSolution {
        let converged = (achieved_net - target).abs() <= Decimal::ONE;
        if !converged {
            warn!(
                %target,
                %achieved_net,
                %base_salary,
                iterations,
                "inverse solve did not converge to the target net"
            );
        }

        GrossSolution {
            base_salary,
            achieved_net,
            iterations,
            converged,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::Country;

    fn solve_for(
        country: Country,
        target: Decimal,
    ) -> (NetSalaryCalculator, GrossSolution) {
        let calculator = NetSalaryCalculator::for_country(country);
        let solution = GrossSolver::new(&calculator).solve(
            target,
            &SalaryComponents::default(),
            &FamilyProfile::default(),
        );
        (calculator, solution)
    }

    // =========================================================================
    // statutory scenarios, inverted
    // =========================================================================

    #[test]
    fn solve_recovers_benin_statutory_scenario() {
        let (calculator, solution) = solve_for(Country::Benin, dec!(368204));

        assert!(solution.converged);
        assert_eq!(solution.achieved_net, dec!(368204));

        let result = calculator.compute(
            &SalaryComponents::from_base(solution.base_salary),
            &FamilyProfile::default(),
        );
        assert_eq!(result.net_salary, dec!(368204));
    }

    #[test]
    fn solve_recovers_togo_statutory_scenario() {
        let (_, solution) = solve_for(Country::Togo, dec!(252816));

        assert!(solution.converged);
        assert_eq!(solution.achieved_net, dec!(252816));
    }

    // =========================================================================
    // round trips
    // =========================================================================

    #[test]
    fn solve_round_trips_across_salary_range_for_benin() {
        let calculator = NetSalaryCalculator::for_country(Country::Benin);
        let solver = GrossSolver::new(&calculator);

        for target in [dec!(50000), dec!(150000), dec!(300000), dec!(1000000)] {
            let solution = solver.solve(
                target,
                &SalaryComponents::default(),
                &FamilyProfile::default(),
            );

            assert!(solution.converged, "target {target} did not converge");
            assert!((solution.achieved_net - target).abs() <= dec!(1));
        }
    }

    #[test]
    fn solve_round_trips_across_salary_range_for_togo() {
        let calculator = NetSalaryCalculator::for_country(Country::Togo);
        let solver = GrossSolver::new(&calculator);

        for target in [dec!(50000), dec!(150000), dec!(300000), dec!(1000000)] {
            let solution = solver.solve(
                target,
                &SalaryComponents::default(),
                &FamilyProfile::default(),
            );

            assert!(solution.converged, "target {target} did not converge");
            assert!((solution.achieved_net - target).abs() <= dec!(1));
        }
    }

    // =========================================================================
    // fixed bonuses
    // =========================================================================

    #[test]
    fn solve_holds_bonuses_fixed_while_varying_base() {
        let calculator = NetSalaryCalculator::for_country(Country::Togo);
        let solver = GrossSolver::new(&calculator);

        let bonuses = SalaryComponents {
            transport_bonus: dec!(30000),
            housing_bonus: dec!(20000),
            ..SalaryComponents::default()
        };

        let solution = solver.solve(dec!(252816), &bonuses, &FamilyProfile::default());

        assert!(solution.converged);
        // The statutory scenario nets 252 816 from a 300 000 gross, so with
        // 50 000 of fixed bonuses the base lands near 250 000.
        assert!((solution.base_salary - dec!(250000)).abs() <= dec!(1));
    }

    #[test]
    fn solve_returns_zero_base_when_bonuses_alone_cover_target() {
        let calculator = NetSalaryCalculator::for_country(Country::Benin);
        let solver = GrossSolver::new(&calculator);

        let bonuses = SalaryComponents {
            transport_bonus: dec!(200000),
            ..SalaryComponents::default()
        };

        let solution = solver.solve(dec!(50000), &bonuses, &FamilyProfile::default());

        assert_eq!(solution.base_salary, dec!(0));
        assert_eq!(solution.iterations, 0);
        assert!(solution.achieved_net >= dec!(50000));
    }

    // =========================================================================
    // edge targets
    // =========================================================================

    #[test]
    fn solve_zero_target_yields_zero_base() {
        let (_, solution) = solve_for(Country::Benin, dec!(0));

        assert_eq!(solution.base_salary, dec!(0));
        assert_eq!(solution.achieved_net, dec!(0));
        assert!(solution.converged);
    }

    #[test]
    fn solve_clamps_negative_target_to_zero() {
        let (_, solution) = solve_for(Country::Togo, dec!(-10000));

        assert_eq!(solution.base_salary, dec!(0));
        assert!(solution.converged);
    }

    #[test]
    fn solve_stays_within_iteration_budget() {
        let (_, solution) = solve_for(Country::Togo, dec!(5000000));

        assert!(solution.converged);
        assert!(solution.iterations < MAX_ITERATIONS);
    }
}
