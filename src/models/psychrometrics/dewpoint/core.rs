//! Computational core for the dewpoint model.
//!
//! The algorithm is a fixed chain of four elementwise steps:
//!
//! 1. Convert specific humidity to a water vapor mole fraction.
//! 2. Scale by total pressure to get the vapor partial pressure.
//! 3. Estimate the saturation vapor pressure at the air temperature.
//! 4. Invert the Magnus relation at the resulting relative humidity.
//!
//! Evaluation never fails: out-of-domain inputs produce non-finite values
//! per IEEE 754 instead of errors. The validated construction path lives in
//! [`input`].

mod input;

pub use input::{DewpointInput, DewpointInputError};

use thiserror::Error;
use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use crate::support::psychro::{magnus, vapor};

/// Moist-air properties computed by the dewpoint model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DewpointOutput {
    /// Relative humidity as a ratio; 1.0 is saturation.
    pub relative_humidity: Ratio,

    /// Temperature at which the air becomes saturated at constant pressure.
    pub dewpoint: ThermodynamicTemperature,
}

/// Errors from elementwise evaluation over input slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ElementwiseError {
    /// The input slices have different lengths.
    #[error(
        "input slices must have equal lengths: \
         specific humidity has {specific_humidity}, pressure has {pressure}, \
         temperature has {temperature}"
    )]
    MismatchedLengths {
        specific_humidity: usize,
        pressure: usize,
        temperature: usize,
    },
}

/// Computes the dewpoint for a single validated input.
#[must_use]
pub(crate) fn solve(input: &DewpointInput) -> DewpointOutput {
    solve_raw(
        input.specific_humidity(),
        input.pressure(),
        input.temperature(),
    )
}

/// Computes the dewpoint from raw quantities.
///
/// No validation is applied. A specific humidity of zero yields exactly zero
/// relative humidity and a non-finite dewpoint.
#[must_use]
pub(crate) fn solve_raw(
    specific_humidity: Ratio,
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> DewpointOutput {
    let mole_fraction = vapor::mole_fraction(specific_humidity);
    let partial_pressure = vapor::partial_pressure(mole_fraction, pressure);
    let saturation_pressure = vapor::saturation_pressure(temperature);
    let relative_humidity = vapor::relative_humidity(partial_pressure, saturation_pressure);

    DewpointOutput {
        relative_humidity,
        dewpoint: magnus::dewpoint(temperature, relative_humidity),
    }
}

/// Evaluates the model elementwise over parallel input slices.
///
/// Equivalent to one [`solve_raw`] call per element.
///
/// # Errors
///
/// Returns [`ElementwiseError::MismatchedLengths`] if the slices differ in
/// length.
pub(crate) fn solve_elementwise(
    specific_humidity: &[Ratio],
    pressure: &[Pressure],
    temperature: &[ThermodynamicTemperature],
) -> Result<Vec<DewpointOutput>, ElementwiseError> {
    if specific_humidity.len() != pressure.len() || pressure.len() != temperature.len() {
        return Err(ElementwiseError::MismatchedLengths {
            specific_humidity: specific_humidity.len(),
            pressure: pressure.len(),
            temperature: temperature.len(),
        });
    }

    Ok(specific_humidity
        .iter()
        .zip(pressure)
        .zip(temperature)
        .map(|((&q, &p), &t)| solve_raw(q, p, t))
        .collect())
}
