use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, TemperatureInterval},
    pressure::pascal,
    temperature_interval::kelvin as delta_kelvin,
};

/// Solver configuration for the wet-bulb solve.
#[derive(Debug, Clone, Copy)]
pub struct WetBulbConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the wet-bulb temperature search variable.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance for the psychrometer balance residual.
    pub residual_tol: Pressure,

    /// How far below the dry-bulb temperature to bracket the root.
    ///
    /// The default of 60 K is sized for near-atmospheric pressures; at very
    /// low total pressures the balance may sit deeper than the bracket and
    /// the solve reports a bisection error.
    pub search_depth: TemperatureInterval,

    /// Psychrometer coefficient `A`, 1/°C.
    ///
    /// The default of 6.5e-4 applies to a ventilated psychrometer.
    pub psychrometer_coefficient: f64,
}

impl Default for WetBulbConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-10),
            residual_tol: Pressure::new::<pascal>(1e-9),
            search_depth: TemperatureInterval::new::<delta_kelvin>(60.0),
            psychrometer_coefficient: 6.5e-4,
        }
    }
}

impl WetBulbConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol.get::<pascal>(),
        }
    }
}
