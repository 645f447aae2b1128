//! # Compactness Ratio
//!
//! Measured density expressed as a percentage of a theoretical/reference
//! density. A ratio of 100 means the part reached full theoretical
//! density; powder-metallurgy parts typically land below that.

use crate::errors::{MetError, MetResult};

/// Compute the compactness ratio in percent.
///
/// `ratio = measured × 100 / theoretical`
///
/// Both inputs must be finite, and the theoretical density must be nonzero.
pub fn compactness_ratio(
    measured_density_g_cm3: f64,
    theoretical_density_g_cm3: f64,
) -> MetResult<f64> {
    if !measured_density_g_cm3.is_finite() {
        return Err(MetError::invalid_input(
            "measured_density_g_cm3",
            measured_density_g_cm3.to_string(),
            "Value must be a finite number",
        ));
    }
    if !theoretical_density_g_cm3.is_finite() {
        return Err(MetError::invalid_input(
            "theoretical_density_g_cm3",
            theoretical_density_g_cm3.to_string(),
            "Value must be a finite number",
        ));
    }
    if theoretical_density_g_cm3 == 0.0 {
        return Err(MetError::invalid_input(
            "theoretical_density_g_cm3",
            "0",
            "Theoretical density must be nonzero",
        ));
    }

    Ok(measured_density_g_cm3 * 100.0 / theoretical_density_g_cm3)
}
