//! # Request Boundary
//!
//! The surface the invocation layer (HTTP handlers, CLI prompts) talks to.
//! External numeric inputs arrive as raw strings; this module parses and
//! validates them into finite numbers in one place, so every formula
//! downstream can assume a valid numeric domain, and formats results to
//! each operation's presentation contract:
//!
//! - blended (specific) density and specified density: 3 decimal digits
//! - measured (Archimedes) density and compactness ratio: 2 decimal digits
//!
//! The asymmetry is deliberate and per operation - rounding is an argument
//! at each call site, not a shared constant. The calculations themselves
//! return full precision.
//!
//! ## Example
//!
//! ```rust
//! use met_core::requests::{measured_density, ArchimedesQuery};
//!
//! let query = ArchimedesQuery {
//!     mass_in_air: "50".to_string(),
//!     mass_in_fluid: "44".to_string(),
//!     fluid_density: "1.0".to_string(),
//!     attachment_mass_in_air: None,
//!     attachment_mass_in_fluid: None,
//!     attachment_present: "no".to_string(),
//! };
//!
//! let report = measured_density(&query).unwrap();
//! assert_eq!(report.density, "8.33");
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{
    archimedes, compactness_ratio, specific_density, specified_density, ArchimedesInput,
};
use crate::composition::{replace_composition, resolve_for_part};
use crate::errors::{MetError, MetResult};
use crate::materials::{AlloyDb, ElementDb};
use crate::parts::{CompositionEntry, PartDb};

// ============================================================================
// Parse-and-validate
// ============================================================================

/// Parse a raw request string into a finite f64.
///
/// Missing or blank input fails with `MissingField`; non-numeric or
/// non-finite input fails with `InvalidInput` naming the field.
pub fn parse_finite(field: &str, raw: &str) -> MetResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MetError::missing_field(field));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| MetError::invalid_input(field, trimmed, "Not a number"))?;
    if !value.is_finite() {
        return Err(MetError::invalid_input(
            field,
            trimmed,
            "Not a finite number",
        ));
    }
    Ok(value)
}

/// Parse a raw yes/no request flag.
///
/// Accepts `yes`/`no`/`true`/`false`, case-insensitive, surrounding
/// whitespace ignored.
pub fn parse_flag(field: &str, raw: &str) -> MetResult<bool> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MetError::missing_field(field));
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "yes" | "true" => Ok(true),
        "no" | "false" => Ok(false),
        _ => Err(MetError::invalid_input(
            field,
            trimmed,
            "Expected yes, no, true, or false",
        )),
    }
}

/// Format a value to a fixed number of decimal digits for presentation.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

// ============================================================================
// Query types (raw string parameters, as they arrive on the wire)
// ============================================================================

/// Raw query parameters for an Archimedes density measurement.
///
/// Attachment masses may be omitted; they default to zero and are ignored
/// entirely when `attachment_present` parses to false.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchimedesQuery {
    pub mass_in_air: String,
    pub mass_in_fluid: String,
    pub fluid_density: String,
    #[serde(default)]
    pub attachment_mass_in_air: Option<String>,
    #[serde(default)]
    pub attachment_mass_in_fluid: Option<String>,
    pub attachment_present: String,
}

impl ArchimedesQuery {
    /// Parse every parameter into a validated calculation input.
    pub fn parse(&self) -> MetResult<ArchimedesInput> {
        let attachment_mass = |field: &str, raw: &Option<String>| -> MetResult<f64> {
            match raw {
                Some(raw) if !raw.trim().is_empty() => parse_finite(field, raw),
                _ => Ok(0.0),
            }
        };

        Ok(ArchimedesInput {
            mass_in_air_g: parse_finite("mass_in_air", &self.mass_in_air)?,
            mass_in_fluid_g: parse_finite("mass_in_fluid", &self.mass_in_fluid)?,
            fluid_density_g_cm3: parse_finite("fluid_density", &self.fluid_density)?,
            attachment_mass_in_air_g: attachment_mass(
                "attachment_mass_in_air",
                &self.attachment_mass_in_air,
            )?,
            attachment_mass_in_fluid_g: attachment_mass(
                "attachment_mass_in_fluid",
                &self.attachment_mass_in_fluid,
            )?,
            attachment_present: parse_flag("attachment_present", &self.attachment_present)?,
        })
    }
}

/// Raw query parameters for a compactness ratio calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompactnessQuery {
    pub measured_density: String,
    pub theoretical_density: String,
}

impl CompactnessQuery {
    /// Parse both parameters into validated numbers.
    pub fn parse(&self) -> MetResult<(f64, f64)> {
        Ok((
            parse_finite("measured_density", &self.measured_density)?,
            parse_finite("theoretical_density", &self.theoretical_density)?,
        ))
    }
}

// ============================================================================
// Response types (single computed field, as the caller receives them)
// ============================================================================

/// Blended or specified density, formatted to 3 decimal digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityReport {
    pub formatted_density: String,
}

/// Specified density, when the part has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecifiedDensityReport {
    pub formatted_density: Option<String>,
}

/// Measured (Archimedes) density, formatted to 2 decimal digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredDensityReport {
    pub density: String,
}

/// Compactness ratio, formatted to 2 decimal digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactnessReport {
    pub compactness_ratio: String,
}

// ============================================================================
// Operations
// ============================================================================

/// Specific density of a stored part, by part code.
///
/// Resolves the part's composition (custom entries or standard alloy) and
/// blends it; an alloy-backed part comes back as the alloy's own density.
pub fn part_specific_density(
    parts: &PartDb,
    elements: &ElementDb,
    alloys: &AlloyDb,
    part_code: &str,
) -> MetResult<DensityReport> {
    let part = parts.find_by_code(part_code)?;
    let resolved = resolve_for_part(part, alloys, elements)?;
    let density = specific_density(&resolved)?;
    Ok(DensityReport {
        formatted_density: format_fixed(density, 3),
    })
}

/// Specified (standard-alloy) density of a stored part, by part code.
///
/// `formatted_density` is `None` for a part with a custom composition -
/// a no-value answer, not a failure.
pub fn part_specified_density(
    parts: &PartDb,
    alloys: &AlloyDb,
    part_code: &str,
) -> MetResult<SpecifiedDensityReport> {
    let part = parts.find_by_code(part_code)?;
    let density = specified_density(part, alloys)?;
    Ok(SpecifiedDensityReport {
        formatted_density: density.map(|d| format_fixed(d, 3)),
    })
}

/// Density from raw Archimedes measurement parameters.
pub fn measured_density(query: &ArchimedesQuery) -> MetResult<MeasuredDensityReport> {
    let input = query.parse()?;
    let density = archimedes::calculate(&input)?;
    Ok(MeasuredDensityReport {
        density: format_fixed(density, 2),
    })
}

/// Compactness ratio from raw measured/theoretical density parameters.
pub fn compactness(query: &CompactnessQuery) -> MetResult<CompactnessReport> {
    let (measured, theoretical) = query.parse()?;
    let ratio = compactness_ratio(measured, theoretical)?;
    Ok(CompactnessReport {
        compactness_ratio: format_fixed(ratio, 2),
    })
}

/// Replace a stored part's composition wholesale.
///
/// Fails on an alloy-backed part, an empty entry list, or unresolvable
/// symbols; the stored record is untouched on failure.
pub fn update_part_composition(
    parts: &mut PartDb,
    elements: &ElementDb,
    part_code: &str,
    new_entries: Vec<CompositionEntry>,
) -> MetResult<()> {
    let part = parts.find_by_code_mut(part_code)?;
    replace_composition(part, new_entries, elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{Element, StandardAlloy};
    use crate::parts::Part;
    use uuid::Uuid;

    fn fixture() -> (PartDb, ElementDb, AlloyDb, Uuid) {
        let mut elements = ElementDb::new();
        elements.insert(Element::new("Fe", "Iron", 26, 7.87)).unwrap();
        elements
            .insert(Element::new("Ni", "Nickel", 28, 8.90))
            .unwrap();

        let mut alloys = AlloyDb::new();
        let alloy_id = alloys.insert(StandardAlloy::new("316L", 7.99)).unwrap();

        let owner = Uuid::new_v4();
        let mut parts = PartDb::new();
        parts
            .add(
                Part::new_custom(
                    "P-100",
                    "Turbine Disc",
                    owner,
                    vec![
                        CompositionEntry::new("Fe", 70.0),
                        CompositionEntry::new("Ni", 30.0),
                    ],
                ),
                &elements,
                &alloys,
            )
            .unwrap();
        parts
            .add(
                Part::new_standard_alloy("P-200", "Valve Body", owner, alloy_id),
                &elements,
                &alloys,
            )
            .unwrap();

        (parts, elements, alloys, alloy_id)
    }

    #[test]
    fn test_parse_finite() {
        assert_eq!(parse_finite("x", "7.87").unwrap(), 7.87);
        assert_eq!(parse_finite("x", "  -3.5  ").unwrap(), -3.5);

        assert_eq!(parse_finite("x", "").unwrap_err().error_code(), "MISSING_FIELD");
        assert_eq!(parse_finite("x", "   ").unwrap_err().error_code(), "MISSING_FIELD");
        assert_eq!(parse_finite("x", "abc").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(parse_finite("x", "NaN").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(parse_finite("x", "inf").unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("f", "yes").unwrap());
        assert!(parse_flag("f", " TRUE ").unwrap());
        assert!(!parse_flag("f", "No").unwrap());
        assert!(!parse_flag("f", "false").unwrap());

        assert_eq!(parse_flag("f", "").unwrap_err().error_code(), "MISSING_FIELD");
        assert_eq!(parse_flag("f", "maybe").unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_format_fixed_per_operation_contract() {
        assert_eq!(format_fixed(8.152865, 3), "8.153");
        assert_eq!(format_fixed(50.0 / 6.0, 2), "8.33");
        assert_eq!(format_fixed(100.0, 2), "100.00");
    }

    #[test]
    fn test_part_specific_density_end_to_end() {
        let (parts, elements, alloys, _) = fixture();

        let report = part_specific_density(&parts, &elements, &alloys, "P-100").unwrap();
        assert_eq!(report.formatted_density, "8.153");
    }

    #[test]
    fn test_part_specific_density_alloy_backed() {
        let (parts, elements, alloys, _) = fixture();

        let report = part_specific_density(&parts, &elements, &alloys, "P-200").unwrap();
        assert_eq!(report.formatted_density, "7.990");
    }

    #[test]
    fn test_part_specific_density_unknown_part() {
        let (parts, elements, alloys, _) = fixture();

        let err = part_specific_density(&parts, &elements, &alloys, "P-404").unwrap_err();
        assert_eq!(err.error_code(), "PART_NOT_FOUND");
    }

    #[test]
    fn test_part_specified_density() {
        let (parts, _, alloys, _) = fixture();

        let report = part_specified_density(&parts, &alloys, "P-200").unwrap();
        assert_eq!(report.formatted_density, Some("7.990".to_string()));

        let report = part_specified_density(&parts, &alloys, "P-100").unwrap();
        assert_eq!(report.formatted_density, None);
    }

    #[test]
    fn test_measured_density_end_to_end() {
        let query = ArchimedesQuery {
            mass_in_air: "50".to_string(),
            mass_in_fluid: "44".to_string(),
            fluid_density: "1.0".to_string(),
            attachment_mass_in_air: None,
            attachment_mass_in_fluid: None,
            attachment_present: "no".to_string(),
        };

        let report = measured_density(&query).unwrap();
        assert_eq!(report.density, "8.33");
    }

    #[test]
    fn test_measured_density_ignores_attachment_when_absent() {
        let query = ArchimedesQuery {
            mass_in_air: "50".to_string(),
            mass_in_fluid: "44".to_string(),
            fluid_density: "1.0".to_string(),
            attachment_mass_in_air: Some("12.5".to_string()),
            attachment_mass_in_fluid: Some("9.75".to_string()),
            attachment_present: "no".to_string(),
        };

        let report = measured_density(&query).unwrap();
        assert_eq!(report.density, "8.33");
    }

    #[test]
    fn test_measured_density_bad_number() {
        let query = ArchimedesQuery {
            mass_in_air: "fifty".to_string(),
            mass_in_fluid: "44".to_string(),
            fluid_density: "1.0".to_string(),
            attachment_mass_in_air: None,
            attachment_mass_in_fluid: None,
            attachment_present: "no".to_string(),
        };

        let err = measured_density(&query).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_compactness_end_to_end() {
        let query = CompactnessQuery {
            measured_density: "7.8".to_string(),
            theoretical_density: "7.8".to_string(),
        };

        let report = compactness(&query).unwrap();
        assert_eq!(report.compactness_ratio, "100.00");
    }

    #[test]
    fn test_compactness_zero_theoretical() {
        let query = CompactnessQuery {
            measured_density: "7.8".to_string(),
            theoretical_density: "0".to_string(),
        };

        let err = compactness(&query).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_update_part_composition() {
        let (mut parts, elements, _, _) = fixture();

        update_part_composition(
            &mut parts,
            &elements,
            "P-100",
            vec![CompositionEntry::new("Ni", 100.0)],
        )
        .unwrap();

        let alloys = AlloyDb::new();
        let report = part_specific_density(&parts, &elements, &alloys, "P-100").unwrap();
        assert_eq!(report.formatted_density, "8.900");
    }

    #[test]
    fn test_update_part_composition_alloy_backed_rejected() {
        let (mut parts, elements, _alloys, alloy_id) = fixture();

        let err = update_part_composition(
            &mut parts,
            &elements,
            "P-200",
            vec![CompositionEntry::new("Fe", 100.0)],
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_OPERATION");

        // The stored record is unchanged.
        let part = parts.find_by_code("P-200").unwrap();
        assert_eq!(part.alloy_id(), Some(alloy_id));
    }

    #[test]
    fn test_report_serialization() {
        let report = DensityReport {
            formatted_density: "8.152".to_string(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"formatted_density\":\"8.152\""));

        let report = CompactnessReport {
            compactness_ratio: "100.00".to_string(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"compactness_ratio\":\"100.00\""));
    }
}
