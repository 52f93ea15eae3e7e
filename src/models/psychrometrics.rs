//! Moist-air psychrometric models.
//!
//! - [`dewpoint`]: closed-form dewpoint from specific humidity, pressure,
//!   and air temperature.
//! - [`wet_bulb`]: iterative wet-bulb temperature from the psychrometer
//!   balance.
//!
//! Both models share the saturation curve in
//! [`support::psychro`](crate::support::psychro), so their outputs are
//! mutually consistent: for unsaturated air the dewpoint lies below the
//! wet-bulb temperature, which lies below the dry-bulb temperature.

pub mod dewpoint;
pub mod wet_bulb;

pub use dewpoint::Dewpoint;
pub use wet_bulb::WetBulb;
