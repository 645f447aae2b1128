//! # Specific Density of a Composite
//!
//! Combines constituent densities and mass fractions into the density of
//! the mixture via the reciprocal-sum-of-volumes rule (a mass-weighted
//! harmonic mean): each entry contributes `fraction / density` of volume
//! per unit mass, and the composite density is the inverse of the total.
//!
//! The function returns full precision; rounding to the presentation
//! contract happens at the request boundary.
//!
//! ## Example
//!
//! ```rust
//! use met_core::calculations::specific_density;
//! use met_core::composition::DensityEntry;
//!
//! let entries = vec![
//!     DensityEntry { density_g_cm3: 7.87, mass_percent: 70.0 },
//!     DensityEntry { density_g_cm3: 8.90, mass_percent: 30.0 },
//! ];
//!
//! let density = specific_density(&entries).unwrap();
//! assert!((density - 8.153).abs() < 1e-3);
//! ```

use crate::composition::DensityEntry;
use crate::errors::{MetError, MetResult};

/// Compute the specific density of a composite from resolved density
/// inputs.
///
/// `result = 1 / Σ(mass_percent_i / 100 / density_i)`
///
/// Every entry must carry a positive, finite density and mass percentage;
/// an empty list is rejected before the formula runs. A volume sum of
/// exactly zero (unreachable with valid entries, but guarded regardless)
/// fails with `DivisionByZero`.
pub fn specific_density(entries: &[DensityEntry]) -> MetResult<f64> {
    if entries.is_empty() {
        return Err(MetError::invalid_composition(
            "Cannot compute specific density of an empty composition",
        ));
    }

    let mut total_volume = 0.0;
    for entry in entries {
        if !entry.density_g_cm3.is_finite() || entry.density_g_cm3 <= 0.0 {
            return Err(MetError::invalid_input(
                "density_g_cm3",
                entry.density_g_cm3.to_string(),
                "Constituent density must be a positive finite number",
            ));
        }
        if !entry.mass_percent.is_finite() || entry.mass_percent <= 0.0 {
            return Err(MetError::invalid_input(
                "mass_percent",
                entry.mass_percent.to_string(),
                "Mass percentage must be a positive finite number",
            ));
        }

        let mass_fraction = entry.mass_percent / 100.0;
        total_volume += mass_fraction / entry.density_g_cm3;
    }

    if total_volume == 0.0 || !total_volume.is_finite() {
        return Err(MetError::division_by_zero("specific_density"));
    }

    Ok(1.0 / total_volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(density: f64, percent: f64) -> DensityEntry {
        DensityEntry {
            density_g_cm3: density,
            mass_percent: percent,
        }
    }

    #[test]
    fn test_iron_nickel_blend() {
        // 70% Fe (7.87) + 30% Ni (8.90):
        // volume = 0.70/7.87 + 0.30/8.90 = 0.12265..., density = 1/volume
        let entries = vec![entry(7.87, 70.0), entry(8.90, 30.0)];
        let density = specific_density(&entries).unwrap();
        assert!((density - 8.1531).abs() < 1e-3);
    }

    #[test]
    fn test_single_entry_returns_its_density() {
        let density = specific_density(&[entry(7.87, 100.0)]).unwrap();
        assert!((density - 7.87).abs() < 1e-12);
    }

    #[test]
    fn test_order_invariant() {
        let forward = vec![entry(7.87, 55.0), entry(8.90, 25.0), entry(7.19, 20.0)];
        let reversed: Vec<DensityEntry> = forward.iter().rev().copied().collect();

        let a = specific_density(&forward).unwrap();
        let b = specific_density(&reversed).unwrap();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_empty_list_rejected() {
        let err = specific_density(&[]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_COMPOSITION");
    }

    #[test]
    fn test_nonpositive_density_rejected() {
        let err = specific_density(&[entry(0.0, 100.0)]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = specific_density(&[entry(-7.87, 100.0)]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_nonfinite_inputs_rejected() {
        let err = specific_density(&[entry(f64::NAN, 100.0)]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = specific_density(&[entry(7.87, f64::INFINITY)]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_nonpositive_percentage_rejected() {
        let err = specific_density(&[entry(7.87, 0.0)]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
