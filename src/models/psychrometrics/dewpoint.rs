//! Dewpoint of moist air from specific humidity.
//!
//! [`Dewpoint`] converts specific humidity, total pressure, and air
//! temperature into the temperature at which the air becomes saturated.
//! The computational core is in the internal [`core`] module; this module
//! provides the [`twine_core::Model`] adapter and an elementwise entry
//! point over slices.

pub(crate) mod core;

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

pub use self::core::{DewpointInput, DewpointInputError, DewpointOutput, ElementwiseError};

/// Computes the dewpoint of moist air from specific humidity.
///
/// Validation happens when constructing a [`DewpointInput`], so evaluation
/// itself is infallible: every input maps to an output, with degenerate
/// inputs producing non-finite values per IEEE 754.
///
/// # Example
///
/// ```
/// use psychro_models::models::psychrometrics::{Dewpoint, dewpoint::DewpointInput};
/// use twine_core::Model;
/// use uom::si::{
///     f64::{Pressure, Ratio, ThermodynamicTemperature},
///     pressure::pascal,
///     ratio::ratio,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let input = DewpointInput::new(
///     Ratio::new::<ratio>(0.01),
///     Pressure::new::<pascal>(101_325.0),
///     ThermodynamicTemperature::new::<degree_celsius>(20.0),
/// )?;
///
/// let output = Dewpoint.call(&input)?;
/// assert!(output.dewpoint.get::<degree_celsius>() < 20.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dewpoint;

impl Model for Dewpoint {
    type Input = DewpointInput;
    type Output = DewpointOutput;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(core::solve(input))
    }
}

impl Dewpoint {
    /// Evaluates the model elementwise over parallel slices of inputs.
    ///
    /// The slices must have equal lengths; no broadcasting is performed.
    /// Each element is computed exactly as a scalar call would compute it,
    /// and no validation is applied, matching the raw elementwise behavior:
    /// degenerate entries flow through as non-finite outputs.
    ///
    /// # Errors
    ///
    /// Returns [`ElementwiseError::MismatchedLengths`] if the slices differ
    /// in length.
    pub fn call_elementwise(
        &self,
        specific_humidity: &[Ratio],
        pressure: &[Pressure],
        temperature: &[ThermodynamicTemperature],
    ) -> Result<Vec<DewpointOutput>, ElementwiseError> {
        core::solve_elementwise(specific_humidity, pressure, temperature)
    }
}
