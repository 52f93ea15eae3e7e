//! Moist-air vapor pressure relations.
//!
//! Specific humidity (mass of water vapor per mass of air) is converted to a
//! mole-fraction-equivalent ratio via the molar masses of dry air and water,
//! then scaled by total pressure to get the vapor partial pressure.
//!
//! The saturation vapor pressure uses a simplified Clausius–Clapeyron
//! relation, `e_s = 611 · exp(0.067 · T)` with `T` in degrees Celsius,
//! calibrated for air temperatures between 0 °C and 60 °C. Outside that
//! range it still evaluates but loses accuracy.

use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::degree_celsius,
};

/// Molar mass of dry air, g/mol.
const MOLAR_MASS_DRY_AIR: f64 = 28.97;

/// Molar mass of water, g/mol.
const MOLAR_MASS_WATER: f64 = 18.015;

/// Saturation vapor pressure at 0 °C, Pa.
const SATURATION_PRESSURE_AT_ZERO_C: f64 = 611.0;

/// Exponential slope of the saturation curve, 1/°C.
const SATURATION_SLOPE: f64 = 0.067;

/// Converts specific humidity to the equivalent mole fraction of water vapor.
///
/// The conversion scales the mass mixing ratio by the molar mass ratio of
/// dry air to water.
#[must_use]
pub fn mole_fraction(specific_humidity: Ratio) -> Ratio {
    specific_humidity * (MOLAR_MASS_DRY_AIR / MOLAR_MASS_WATER)
}

/// Computes the vapor partial pressure implied by a vapor mole fraction at
/// the given total pressure.
#[must_use]
pub fn partial_pressure(mole_fraction: Ratio, total_pressure: Pressure) -> Pressure {
    mole_fraction * total_pressure
}

/// Estimates the saturation vapor pressure of air at the given temperature.
#[must_use]
pub fn saturation_pressure(temperature: ThermodynamicTemperature) -> Pressure {
    let t = temperature.get::<degree_celsius>();
    Pressure::new::<pascal>(SATURATION_PRESSURE_AT_ZERO_C * (SATURATION_SLOPE * t).exp())
}

/// Computes relative humidity as the ratio of vapor partial pressure to
/// saturation pressure.
///
/// The result is a plain ratio, not a percentage: 1.0 means saturation.
/// Zero partial pressure maps to exactly zero. A zero saturation pressure is
/// not trapped and produces an infinite or not-a-number ratio per IEEE 754.
#[must_use]
pub fn relative_humidity(partial: Pressure, saturation: Pressure) -> Ratio {
    partial / saturation
}
