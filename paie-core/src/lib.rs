pub mod calculations;
pub mod models;
pub mod simulation;

pub use models::*;
pub use simulation::{
    Direction, SimulationReport, SimulationRequest, SolverDiagnostics, simulate,
};
