//! # Specified Density
//!
//! The pre-recorded density of the standard alloy a part references.
//! A part with a custom composition has no specified density - that is a
//! legitimate "no value" answer, distinct from any failure, so it is an
//! explicit `None` rather than a sentinel number.

use crate::errors::MetResult;
use crate::materials::AlloyDb;
use crate::parts::Part;

/// Look up a part's specified (standard-alloy) density.
///
/// Returns `None` for a part with a custom composition. For an alloy-backed
/// part, a dangling alloy reference fails with `AlloyNotFound`.
pub fn specified_density(part: &Part, alloys: &AlloyDb) -> MetResult<Option<f64>> {
    match part.alloy_id() {
        None => Ok(None),
        Some(alloy_id) => Ok(Some(alloys.get(&alloy_id)?.density_g_cm3)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::StandardAlloy;
    use crate::parts::CompositionEntry;
    use uuid::Uuid;

    #[test]
    fn test_alloy_backed_part() {
        let mut alloys = AlloyDb::new();
        let alloy_id = alloys.insert(StandardAlloy::new("316L", 7.99)).unwrap();
        let part = Part::new_standard_alloy("P-200", "Valve", Uuid::new_v4(), alloy_id);

        assert_eq!(specified_density(&part, &alloys).unwrap(), Some(7.99));
    }

    #[test]
    fn test_custom_part_has_no_specified_density() {
        let alloys = AlloyDb::new();
        let part = Part::new_custom(
            "P-100",
            "Disc",
            Uuid::new_v4(),
            vec![CompositionEntry::new("Fe", 100.0)],
        );

        assert_eq!(specified_density(&part, &alloys).unwrap(), None);
    }

    #[test]
    fn test_dangling_reference_is_an_error() {
        let alloys = AlloyDb::new();
        let part = Part::new_standard_alloy("P-200", "Valve", Uuid::new_v4(), Uuid::new_v4());

        let err = specified_density(&part, &alloys).unwrap_err();
        assert_eq!(err.error_code(), "ALLOY_NOT_FOUND");
    }
}
