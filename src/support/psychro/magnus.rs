//! Magnus dewpoint inversion.
//!
//! Given air temperature and relative humidity, the August–Roche–Magnus
//! approximation gives the dewpoint in closed form:
//!
//! ```text
//! γ   = a·T / (b + T) + ln(RH)
//! T_d = b·γ / (a − γ)
//! ```
//!
//! with `a = 17.271`, `b = 237.7 °C`, and `RH` expressed as a ratio in
//! (0, 1]. Relative humidity is deliberately **not** converted to a
//! percentage here: a ×100 factor inside the logarithm would have to be
//! subtracted back out, so the ratio form is the working formula.
//!
//! Degenerate inputs are not trapped. A relative humidity of zero drives
//! `ln(RH)` to negative infinity and the dewpoint to a non-finite value,
//! and `γ = a` divides by zero; both propagate per IEEE 754.

use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

/// Magnus coefficient `a`, dimensionless.
const MAGNUS_A: f64 = 17.271;

/// Magnus coefficient `b`, °C.
const MAGNUS_B: f64 = 237.7;

/// Computes the dewpoint of air at the given temperature and relative
/// humidity.
#[must_use]
pub fn dewpoint(
    temperature: ThermodynamicTemperature,
    relative_humidity: Ratio,
) -> ThermodynamicTemperature {
    let t = temperature.get::<degree_celsius>();
    let rh = relative_humidity.get::<ratio>();

    let gamma = (MAGNUS_A * t) / (MAGNUS_B + t) + rh.ln();
    ThermodynamicTemperature::new::<degree_celsius>((MAGNUS_B * gamma) / (MAGNUS_A - gamma))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn saturated_air_dews_at_air_temperature() {
        let t = celsius(25.0);
        let td = dewpoint(t, Ratio::new::<ratio>(1.0));
        assert_relative_eq!(td.get::<degree_celsius>(), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn half_saturated_room_air() {
        let td = dewpoint(celsius(20.0), Ratio::new::<ratio>(0.5));
        assert_abs_diff_eq!(td.get::<degree_celsius>(), 9.2549, epsilon = 1e-3);
    }

    #[test]
    fn dewpoint_rises_with_humidity() {
        let t = celsius(20.0);
        let dry = dewpoint(t, Ratio::new::<ratio>(0.3));
        let humid = dewpoint(t, Ratio::new::<ratio>(0.8));
        assert!(humid > dry);
    }

    #[test]
    fn zero_humidity_goes_non_finite_without_panicking() {
        let td = dewpoint(celsius(20.0), Ratio::new::<ratio>(0.0));
        assert!(!td.get::<degree_celsius>().is_finite());
    }
}
