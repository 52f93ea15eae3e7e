use thiserror::Error;
use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
};

/// Validated input state for the wet-bulb model.
///
/// Relative humidity is a ratio in (0, 1]; saturated air is 1.0. The
/// psychrometer balance has no meaningful root for supersaturated or
/// moisture-free air, so both are rejected. As with the dewpoint model,
/// temperature is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WetBulbInput {
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    relative_humidity: Ratio,
}

/// An error returned when a wet-bulb input fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WetBulbInputError {
    /// Pressure must be strictly positive and finite.
    #[error("invalid pressure: {pressure:?}")]
    Pressure { pressure: Pressure },

    /// Relative humidity must be a finite ratio in (0, 1].
    #[error("invalid relative humidity: {relative_humidity:?}")]
    RelativeHumidity { relative_humidity: Ratio },
}

impl WetBulbInput {
    /// Constructs a validated input.
    ///
    /// # Errors
    ///
    /// Returns a [`WetBulbInputError`] if pressure is not strictly positive
    /// and finite, or if relative humidity lies outside (0, 1].
    pub fn new(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        relative_humidity: Ratio,
    ) -> Result<Self, WetBulbInputError> {
        let p = pressure.get::<pascal>();
        if !p.is_finite() || p <= 0.0 {
            return Err(WetBulbInputError::Pressure { pressure });
        }

        let rh = relative_humidity.get::<ratio>();
        if !rh.is_finite() || rh <= 0.0 || rh > 1.0 {
            return Err(WetBulbInputError::RelativeHumidity { relative_humidity });
        }

        Ok(Self {
            pressure,
            temperature,
            relative_humidity,
        })
    }

    /// Constructs an input without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure pressure is strictly positive and relative
    /// humidity lies in (0, 1]. Violating this can leave the solve without
    /// a bracketed root.
    #[must_use]
    pub fn new_unchecked(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        relative_humidity: Ratio,
    ) -> Self {
        Self {
            pressure,
            temperature,
            relative_humidity,
        }
    }

    /// Returns the total pressure.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// Returns the dry-bulb air temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Returns the relative humidity.
    #[must_use]
    pub fn relative_humidity(&self) -> Ratio {
        self.relative_humidity
    }
}
