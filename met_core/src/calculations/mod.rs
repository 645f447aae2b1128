//! # Density Calculations
//!
//! The pure formula core. Every function here is deterministic, side-effect
//! free, and safe to call concurrently; inputs arrive fully resolved (no
//! catalog access except the direct lookup in [`specified`]) and results
//! come back at full precision, leaving rounding to the request boundary.
//!
//! ## Available Calculations
//!
//! - [`specific_density`] - composite density from constituent densities
//!   and mass fractions (reciprocal-sum-of-volumes rule)
//! - [`archimedes`] - density from air/fluid mass measurements with
//!   optional attachment correction
//! - [`compactness`] - measured density as a percentage of theoretical
//! - [`specified`] - direct standard-alloy density lookup

pub mod archimedes;
pub mod compactness;
pub mod specified;
pub mod specific_density;

pub use archimedes::ArchimedesInput;
pub use compactness::compactness_ratio;
pub use specific_density::specific_density;
pub use specified::specified_density;
