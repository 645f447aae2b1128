//! # Composition Resolution
//!
//! Turns a part's declared composition - symbolic element references or a
//! standard-alloy reference - into the concrete density inputs the
//! calculations consume, and applies composition replacement with its
//! mutual-exclusion rule.
//!
//! Resolution is read-only against the catalogs and all-or-nothing: if any
//! referenced record is missing, the caller gets an error naming it, never
//! a partial list.
//!
//! ## Example
//!
//! ```rust
//! use met_core::composition::resolve_for_part;
//! use met_core::materials::{builtin_elements, AlloyDb};
//! use met_core::parts::{CompositionEntry, Part};
//! use uuid::Uuid;
//!
//! let elements = builtin_elements();
//! let alloys = AlloyDb::new();
//!
//! let part = Part::new_custom(
//!     "P-100",
//!     "Bushing",
//!     Uuid::new_v4(),
//!     vec![
//!         CompositionEntry::new("Cu", 90.0),
//!         CompositionEntry::new("Sn", 10.0),
//!     ],
//! );
//!
//! let resolved = resolve_for_part(&part, &alloys, &elements).unwrap();
//! assert_eq!(resolved.len(), 2);
//! assert_eq!(resolved[0].mass_percent, 90.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{MetError, MetResult};
use crate::materials::{AlloyDb, ElementDb};
use crate::parts::{Composition, CompositionEntry, Part};

/// A resolved density input: one constituent's density and its share of the
/// part's mass. Ephemeral - produced here, consumed by the calculations,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityEntry {
    /// Constituent density in g/cm³
    pub density_g_cm3: f64,

    /// Mass percentage of the whole part
    pub mass_percent: f64,
}

/// Resolve a part's declared composition to concrete density inputs.
///
/// - Alloy-backed part: a single entry covering 100% of the mass at the
///   alloy's recorded density (a direct lookup, not a blend).
/// - Custom part: every entry's symbol is resolved through the element
///   catalog in one batch call; entries keep their declared order and
///   duplicates stay distinct.
///
/// Fails with `AlloyNotFound` or `ElementNotFound` (naming the missing
/// symbols) when a reference dangles.
pub fn resolve_for_part(
    part: &Part,
    alloys: &AlloyDb,
    elements: &ElementDb,
) -> MetResult<Vec<DensityEntry>> {
    match &part.composition {
        Composition::StandardAlloy { alloy_id } => {
            let alloy = alloys.get(alloy_id)?;
            Ok(vec![DensityEntry {
                density_g_cm3: alloy.density_g_cm3,
                mass_percent: 100.0,
            }])
        }
        Composition::Custom { entries } => resolve_entries(entries, elements),
    }
}

/// Resolve a list of composition entries against the element catalog.
pub fn resolve_entries(
    entries: &[CompositionEntry],
    elements: &ElementDb,
) -> MetResult<Vec<DensityEntry>> {
    let symbols: Vec<&str> = entries.iter().map(|e| e.symbol.as_str()).collect();
    let densities = elements.lookup_by_symbols(&symbols)?;

    entries
        .iter()
        .map(|entry| {
            let density = densities
                .get(entry.symbol.as_str())
                .copied()
                .ok_or_else(|| MetError::element_not_found(vec![entry.symbol.clone()]))?;
            Ok(DensityEntry {
                density_g_cm3: density,
                mass_percent: entry.mass_percent,
            })
        })
        .collect()
}

/// Replace a custom part's composition wholesale.
///
/// The old entry list is discarded in full, never merged. Fails with
/// `InvalidOperation` on an alloy-backed part (composition and alloy
/// reference are mutually exclusive for the life of the part), with
/// `InvalidComposition` on an empty list, and with `ElementNotFound` when
/// any new symbol is unknown. On any failure the part is left unchanged.
pub fn replace_composition(
    part: &mut Part,
    new_entries: Vec<CompositionEntry>,
    elements: &ElementDb,
) -> MetResult<()> {
    if part.is_alloy_backed() {
        return Err(MetError::invalid_operation(
            "replace_composition",
            format!(
                "Part '{}' references a standard alloy and cannot carry a custom composition",
                part.part_code
            ),
        ));
    }
    if new_entries.is_empty() {
        return Err(MetError::invalid_composition(
            "Composition must contain at least one entry",
        ));
    }

    // Referential check before the swap, so a failed replacement cannot
    // leave the part half-updated.
    resolve_entries(&new_entries, elements)?;

    part.composition = Composition::Custom {
        entries: new_entries,
    };
    part.touch();
    Ok(())
}
