//! Single entry point tying both calculation directions to one report shape.
//!
//! External collaborators (the CLI, batch drivers) should not have to know
//! which direction needs a solver and which does not. [`simulate`] accepts
//! one request shape for both, runs the forward calculator or the inverse
//! solver as asked, and always answers with a full [`SalaryResult`]. Solver
//! diagnostics are attached only when the inverse path ran.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paie_core::models::{Country, FamilyProfile, SalaryComponents};
//! use paie_core::simulation::{Direction, SimulationRequest, simulate};
//!
//! let report = simulate(&SimulationRequest {
//!     country: Country::Togo,
//!     direction: Direction::NetToGross,
//!     amount: dec!(252816),
//!     bonuses: SalaryComponents::default(),
//!     family: FamilyProfile::default(),
//! });
//!
//! assert_eq!(report.result.total_gross, dec!(300000));
//! assert!(report.solver.unwrap().converged);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::{GrossSolver, NetSalaryCalculator};
use crate::models::{Country, FamilyProfile, SalaryComponents, SalaryResult};

/// Which way the engine is asked to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `amount` is the base salary; compute the net.
    GrossToNet,

    /// `amount` is the target net; solve for the base salary.
    NetToGross,
}

/// One request shape for both directions and both jurisdictions.
///
/// For [`Direction::GrossToNet`] the `amount` is the base salary and the
/// `bonuses` components are added on top (their `base_salary` field is
/// ignored). For [`Direction::NetToGross`] the `amount` is the target net
/// and the bonuses are held fixed while the base varies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub country: Country,
    pub direction: Direction,
    pub amount: Decimal,
    pub bonuses: SalaryComponents,
    pub family: FamilyProfile,
}

/// How the inverse solver behaved, when it ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverDiagnostics {
    /// Bisection steps spent.
    pub iterations: u32,

    /// Whether the achieved net landed within one franc of the target.
    pub converged: bool,
}

/// Full payslip plus optional solver diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// The complete breakdown, identical in shape for both directions.
    pub result: SalaryResult,

    /// Present only when the request ran net→gross.
    pub solver: Option<SolverDiagnostics>,
}

/// Runs one simulation end to end.
pub fn simulate(request: &SimulationRequest) -> SimulationReport {
    let calculator = NetSalaryCalculator::for_country(request.country);

    match request.direction {
        Direction::GrossToNet => {
            let components = request.bonuses.with_base(request.amount);
            let result = calculator.compute(&components, &request.family);
            SimulationReport {
                result,
                solver: None,
            }
        }
        Direction::NetToGross => {
            let solution = GrossSolver::new(&calculator).solve(
                request.amount,
                &request.bonuses,
                &request.family,
            );
            let components = request.bonuses.with_base(solution.base_salary);
            let result = calculator.compute(&components, &request.family);
            SimulationReport {
                result,
                solver: Some(SolverDiagnostics {
                    iterations: solution.iterations,
                    converged: solution.converged,
                }),
            }
        }
    }
}
