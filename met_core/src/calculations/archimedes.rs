//! # Archimedes Density Measurement
//!
//! Density of a sample from its mass in air and its apparent mass submerged
//! in a reference fluid of known density. When the sample hangs from an
//! attachment (wire, basket), the attachment's own masses are subtracted
//! first; when no attachment is declared, any supplied attachment masses
//! are ignored outright rather than merely defaulted.
//!
//! ## Example
//!
//! ```rust
//! use met_core::calculations::archimedes::{calculate, ArchimedesInput};
//!
//! let input = ArchimedesInput {
//!     mass_in_air_g: 50.0,
//!     mass_in_fluid_g: 44.0,
//!     fluid_density_g_cm3: 1.0,
//!     attachment_mass_in_air_g: 0.0,
//!     attachment_mass_in_fluid_g: 0.0,
//!     attachment_present: false,
//! };
//!
//! let density = calculate(&input).unwrap();
//! assert!((density - 8.3333).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{MetError, MetResult};

/// Input parameters for an Archimedes density measurement.
///
/// All masses in grams, fluid density in g/cm³.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mass_in_air_g": 50.0,
///   "mass_in_fluid_g": 44.0,
///   "fluid_density_g_cm3": 1.0,
///   "attachment_mass_in_air_g": 0.4,
///   "attachment_mass_in_fluid_g": 0.3,
///   "attachment_present": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchimedesInput {
    /// Sample mass weighed in air (g)
    pub mass_in_air_g: f64,

    /// Apparent sample mass weighed submerged in the fluid (g)
    pub mass_in_fluid_g: f64,

    /// Density of the reference fluid (g/cm³)
    pub fluid_density_g_cm3: f64,

    /// Attachment mass in air (g); only used when `attachment_present`
    #[serde(default)]
    pub attachment_mass_in_air_g: f64,

    /// Attachment mass in fluid (g); only used when `attachment_present`
    #[serde(default)]
    pub attachment_mass_in_fluid_g: f64,

    /// Whether an attachment was used for the measurement
    #[serde(default)]
    pub attachment_present: bool,
}

impl ArchimedesInput {
    /// Validate that every numeric input is finite.
    pub fn validate(&self) -> MetResult<()> {
        let fields = [
            ("mass_in_air_g", self.mass_in_air_g),
            ("mass_in_fluid_g", self.mass_in_fluid_g),
            ("fluid_density_g_cm3", self.fluid_density_g_cm3),
            ("attachment_mass_in_air_g", self.attachment_mass_in_air_g),
            ("attachment_mass_in_fluid_g", self.attachment_mass_in_fluid_g),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(MetError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be a finite number",
                ));
            }
        }
        Ok(())
    }

    /// Effective sample masses after attachment correction.
    ///
    /// With `attachment_present` false the attachment masses are treated as
    /// zero regardless of what was supplied - an explicit override, not a
    /// default.
    pub fn effective_masses(&self) -> (f64, f64) {
        if self.attachment_present {
            (
                self.mass_in_air_g - self.attachment_mass_in_air_g,
                self.mass_in_fluid_g - self.attachment_mass_in_fluid_g,
            )
        } else {
            (self.mass_in_air_g, self.mass_in_fluid_g)
        }
    }
}

/// Compute the sample density from an Archimedes measurement.
///
/// `density = (eff_air × fluid_density) / (eff_air − eff_fluid)`
///
/// Fails with `DivisionByZero` when the effective masses are exactly equal.
pub fn calculate(input: &ArchimedesInput) -> MetResult<f64> {
    input.validate()?;

    let (effective_air, effective_fluid) = input.effective_masses();
    let denominator = effective_air - effective_fluid;
    if denominator == 0.0 {
        return Err(MetError::division_by_zero("archimedes_density"));
    }

    Ok(effective_air * input.fluid_density_g_cm3 / denominator)
}
