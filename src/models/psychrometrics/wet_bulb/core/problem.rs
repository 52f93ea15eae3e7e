//! Problem formulation for the wet-bulb solve.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::psychro::vapor;

/// Saturation state at a candidate wet-bulb temperature.
#[derive(Debug, Clone, Copy)]
pub(super) struct SaturationState {
    pub(super) temperature: ThermodynamicTemperature,
    pub(super) saturation_pressure: Pressure,
}

/// Model adapter that evaluates the saturation curve at a candidate
/// wet-bulb temperature.
pub(super) struct SaturationCurve;

impl Model for SaturationCurve {
    type Input = ThermodynamicTemperature;
    type Output = SaturationState;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(SaturationState {
            temperature: *input,
            saturation_pressure: vapor::saturation_pressure(*input),
        })
    }
}

/// Equation problem definition for the psychrometer balance.
///
/// Computes the residual as `e_s(T_w) − e_a − A·p·(T − T_w)`.
pub(super) struct WetBulbProblem {
    vapor_pressure: Pressure,
    dry_bulb: ThermodynamicTemperature,
    slope_pa_per_degc: f64,
}

impl WetBulbProblem {
    pub(super) fn new(
        total_pressure: Pressure,
        dry_bulb: ThermodynamicTemperature,
        vapor_pressure: Pressure,
        psychrometer_coefficient: f64,
    ) -> Self {
        Self {
            vapor_pressure,
            dry_bulb,
            slope_pa_per_degc: psychrometer_coefficient * total_pressure.get::<pascal>(),
        }
    }
}

impl EquationProblem<1> for WetBulbProblem {
    type Input = ThermodynamicTemperature;
    type Output = SaturationState;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<degree_celsius>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let e_s = output.saturation_pressure.get::<pascal>();
        let e_a = self.vapor_pressure.get::<pascal>();
        let depression =
            self.dry_bulb.get::<degree_celsius>() - output.temperature.get::<degree_celsius>();

        Ok([e_s - e_a - self.slope_pa_per_degc * depression])
    }
}
