use thiserror::Error;
use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
};

/// Validated input state for the dewpoint model.
///
/// Specific humidity and pressure must be strictly positive and finite for
/// the computed dewpoint to be meaningful at all, so [`DewpointInput::new`]
/// rejects anything else. Temperature is not checked: the Magnus inversion
/// is calibrated for 0 °C to 60 °C, but values outside that range still
/// evaluate and merely lose accuracy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DewpointInput {
    specific_humidity: Ratio,
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
}

/// An error returned when a dewpoint input fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DewpointInputError {
    /// Specific humidity must be strictly positive and finite.
    #[error("invalid specific humidity: {specific_humidity:?}")]
    SpecificHumidity { specific_humidity: Ratio },

    /// Pressure must be strictly positive and finite.
    #[error("invalid pressure: {pressure:?}")]
    Pressure { pressure: Pressure },
}

impl DewpointInput {
    /// Constructs a validated input.
    ///
    /// # Errors
    ///
    /// Returns a [`DewpointInputError`] if specific humidity or pressure is
    /// not strictly positive and finite.
    pub fn new(
        specific_humidity: Ratio,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, DewpointInputError> {
        let q = specific_humidity.get::<ratio>();
        if !q.is_finite() || q <= 0.0 {
            return Err(DewpointInputError::SpecificHumidity { specific_humidity });
        }

        let p = pressure.get::<pascal>();
        if !p.is_finite() || p <= 0.0 {
            return Err(DewpointInputError::Pressure { pressure });
        }

        Ok(Self {
            specific_humidity,
            pressure,
            temperature,
        })
    }

    /// Constructs an input without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure specific humidity and pressure are strictly
    /// positive and finite. Degenerate values propagate through the
    /// computation as non-finite results rather than errors.
    #[must_use]
    pub fn new_unchecked(
        specific_humidity: Ratio,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            specific_humidity,
            pressure,
            temperature,
        }
    }

    /// Returns the specific humidity.
    #[must_use]
    pub fn specific_humidity(&self) -> Ratio {
        self.specific_humidity
    }

    /// Returns the total pressure.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// Returns the air temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::thermodynamic_temperature::degree_celsius;

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn accepts_physical_inputs() {
        let input = DewpointInput::new(
            Ratio::new::<ratio>(0.01),
            Pressure::new::<pascal>(101_325.0),
            celsius(20.0),
        )
        .unwrap();

        assert_eq!(input.specific_humidity().get::<ratio>(), 0.01);
        assert_eq!(input.pressure().get::<pascal>(), 101_325.0);
    }

    #[test]
    fn rejects_non_positive_specific_humidity() {
        for q in [0.0, -0.01, f64::NAN] {
            let result = DewpointInput::new(
                Ratio::new::<ratio>(q),
                Pressure::new::<pascal>(101_325.0),
                celsius(20.0),
            );
            assert!(matches!(
                result,
                Err(DewpointInputError::SpecificHumidity { .. })
            ));
        }
    }

    #[test]
    fn rejects_non_positive_pressure() {
        for p in [0.0, -500.0, f64::INFINITY] {
            let result = DewpointInput::new(
                Ratio::new::<ratio>(0.01),
                Pressure::new::<pascal>(p),
                celsius(20.0),
            );
            assert!(matches!(result, Err(DewpointInputError::Pressure { .. })));
        }
    }

    #[test]
    fn unchecked_construction_skips_validation() {
        let input = DewpointInput::new_unchecked(
            Ratio::new::<ratio>(0.0),
            Pressure::new::<pascal>(101_325.0),
            celsius(20.0),
        );
        assert_eq!(input.specific_humidity().get::<ratio>(), 0.0);
    }

    #[test]
    fn out_of_range_temperature_is_not_rejected() {
        assert!(
            DewpointInput::new(
                Ratio::new::<ratio>(0.01),
                Pressure::new::<pascal>(101_325.0),
                celsius(-15.0),
            )
            .is_ok()
        );
    }
}
