//! Wet-bulb temperature of moist air.
//!
//! [`WetBulb`] solves the psychrometer balance for the temperature a
//! ventilated wet thermometer bulb settles at. Unlike the dewpoint, the
//! wet-bulb temperature has no closed form under this crate's saturation
//! curve, so the core solves for it iteratively. The computational core is
//! in the internal [`core`] module.

pub(crate) mod core;

use twine_core::Model;
use uom::si::f64::ThermodynamicTemperature;

pub use self::core::{WetBulbConfig, WetBulbError, WetBulbInput, WetBulbInputError};

/// Solves for the wet-bulb temperature of moist air.
///
/// The model carries its solver configuration; [`WetBulb::default`] uses
/// tolerances tight enough that the bisection result is limited by the
/// underlying saturation estimate, not the solve.
#[derive(Debug, Clone, Copy, Default)]
pub struct WetBulb {
    config: WetBulbConfig,
}

impl WetBulb {
    /// Creates a model with the given solver configuration.
    #[must_use]
    pub fn new(config: WetBulbConfig) -> Self {
        Self { config }
    }
}

impl Model for WetBulb {
    type Input = WetBulbInput;
    type Output = ThermodynamicTemperature;
    type Error = WetBulbError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::solve(input, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Pressure, Ratio},
        pressure::pascal,
        ratio::ratio,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn adapter_solves_with_default_config() {
        let input = WetBulbInput::new(
            Pressure::new::<pascal>(101_325.0),
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
            Ratio::new::<ratio>(0.6),
        )
        .unwrap();

        let wet_bulb = WetBulb::default().call(&input).unwrap();

        let t_w = wet_bulb.get::<degree_celsius>();
        assert!(t_w > 0.0 && t_w < 20.0);
    }
}
