//! Payroll calculation pipeline for the supported jurisdictions.
//!
//! The pipeline is split the way the statutes are read: a progressive
//! bracket evaluator, the forward gross→net calculator composing every
//! deduction in statutory order, and the inverse net→gross solver driving
//! the forward calculator numerically.

pub mod bracket_tax;
pub mod common;
pub mod gross_to_net;
pub mod net_to_gross;

pub use bracket_tax::{BracketSchedule, BracketTaxOutcome};
pub use gross_to_net::NetSalaryCalculator;
pub use net_to_gross::{GrossSolution, GrossSolver, MAX_ITERATIONS};
