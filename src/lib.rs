//! # Psychro Models
//!
//! Psychrometric models and moist-air property tools for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Moist-air [`twine_core::Model`] implementations.
//! - [`support`]: Shared psychrometric relations used by the models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! ## Validity range
//!
//! The saturation vapor pressure estimate used throughout this crate is a
//! simplified Clausius–Clapeyron relation calibrated for air temperatures
//! between 0 °C and 60 °C. Within that range, and for relative humidities
//! between 1% and 100%, the computed dewpoint lands in its documented
//! 0 °C to 50 °C envelope.
//!
//! The range restriction is advisory, not enforced. Out-of-range inputs
//! still evaluate and simply lose physical accuracy, while degenerate inputs
//! (zero humidity, zero relative humidity) produce non-finite values per
//! IEEE 754 rather than errors.

pub mod models;
pub mod support;
