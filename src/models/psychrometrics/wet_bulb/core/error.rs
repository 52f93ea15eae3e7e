use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Pressure;

/// Errors that can occur while solving for the wet-bulb temperature.
#[derive(Debug, Error)]
pub enum WetBulbError {
    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best psychrometer balance residual achieved.
        residual: Pressure,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
