//! Moist-air psychrometric relations.
//!
//! These modules hold the vapor-pressure physics shared by the psychrometric
//! models:
//!
//! - [`vapor`]: converts specific humidity to the vapor partial pressure it
//!   implies, and estimates the saturation vapor pressure of air.
//! - [`magnus`]: closed-form dewpoint inversion of the Magnus relation.
//!
//! All functions are pure and elementwise: no state is retained between
//! calls, and identical inputs always produce bit-identical outputs.

pub mod magnus;
pub mod vapor;
