//! Iterative wet-bulb solve via the psychrometer balance.
//!
//! At the wet-bulb temperature `T_w`, evaporative cooling of the wetted
//! bulb balances sensible heat transfer from the passing air:
//!
//! ```text
//! e_s(T_w) = e_a + A·p·(T − T_w)
//! ```
//!
//! where `e_a` is the actual vapor pressure, `p` the total pressure, and
//! `A` the psychrometer coefficient. The saturation curve `e_s` is the same
//! simplified relation the dewpoint model uses, so for unsaturated air the
//! solved `T_w` falls between the dewpoint and the dry-bulb temperature.
//!
//! The balance is solved by bisection on `T_w` over
//! `[T − search_depth, T]`. Saturated air is the balance's trivial root and
//! returns the dry-bulb temperature without iterating; the default depth is
//! sized for near-atmospheric pressures.

mod config;
mod error;
mod input;
mod problem;

pub use config::WetBulbConfig;
pub use error::WetBulbError;
pub use input::{WetBulbInput, WetBulbInputError};

use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::psychro::vapor;

use problem::{SaturationCurve, WetBulbProblem};

/// Solves the psychrometer balance for the wet-bulb temperature.
///
/// # Errors
///
/// Returns a [`WetBulbError`] if the bisection bracket does not straddle the
/// balance or if the solver fails to converge within the configured
/// iteration limit.
pub(crate) fn solve(
    input: &WetBulbInput,
    config: &WetBulbConfig,
) -> Result<ThermodynamicTemperature, WetBulbError> {
    let dry_bulb = input.temperature();

    if input.relative_humidity().get::<ratio>() == 1.0 {
        return Ok(dry_bulb);
    }

    let saturation = vapor::saturation_pressure(dry_bulb);
    let vapor_pressure = saturation * input.relative_humidity();

    let model = SaturationCurve;
    let problem = WetBulbProblem::new(
        input.pressure(),
        dry_bulb,
        vapor_pressure,
        config.psychrometer_coefficient,
    );

    let t = dry_bulb.get::<degree_celsius>();
    let depth = config.search_depth.get::<delta_kelvin>();

    let solution = bisection::solve(
        &model,
        &problem,
        [t - depth, t],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(WetBulbError::MaxIters {
            residual: Pressure::new::<pascal>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use uom::si::{f64::Ratio, ratio::ratio};

    use crate::models::psychrometrics::dewpoint;

    fn input(p: f64, t: f64, rh: f64) -> WetBulbInput {
        WetBulbInput::new(
            Pressure::new::<pascal>(p),
            ThermodynamicTemperature::new::<degree_celsius>(t),
            Ratio::new::<ratio>(rh),
        )
        .unwrap()
    }

    #[test]
    fn room_air_reference_point() {
        let wet_bulb = solve(&input(101_325.0, 20.0, 0.6982884), &WetBulbConfig::default())
            .expect("solve should converge");

        assert_abs_diff_eq!(wet_bulb.get::<degree_celsius>(), 16.575, epsilon = 0.05);
    }

    #[test]
    fn saturated_air_gives_dry_bulb_temperature() {
        let wet_bulb = solve(&input(101_325.0, 25.0, 1.0), &WetBulbConfig::default())
            .expect("saturated solve should short-circuit");

        assert_eq!(
            wet_bulb,
            ThermodynamicTemperature::new::<degree_celsius>(25.0)
        );
    }

    #[test]
    fn near_saturated_air_approaches_dry_bulb() {
        let wet_bulb = solve(&input(101_325.0, 25.0, 0.999_999), &WetBulbConfig::default())
            .expect("solve should converge");

        assert_relative_eq!(wet_bulb.get::<degree_celsius>(), 25.0, epsilon = 1e-4);
    }

    #[test]
    fn falls_between_dewpoint_and_dry_bulb() {
        let q = Ratio::new::<ratio>(0.01);
        let p = Pressure::new::<pascal>(101_325.0);
        let t = ThermodynamicTemperature::new::<degree_celsius>(20.0);

        let moist_air = dewpoint::core::solve_raw(q, p, t);
        let wet_bulb = solve(
            &WetBulbInput::new(p, t, moist_air.relative_humidity).unwrap(),
            &WetBulbConfig::default(),
        )
        .expect("solve should converge");

        assert!(moist_air.dewpoint < wet_bulb);
        assert!(wet_bulb < t);
    }

    #[test]
    fn iteration_limit_surfaces_as_error() {
        let config = WetBulbConfig {
            max_iters: 1,
            ..WetBulbConfig::default()
        };

        assert!(solve(&input(101_325.0, 20.0, 0.5), &config).is_err());
    }
}
