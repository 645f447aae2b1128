//! Standard Alloy Catalog
//!
//! Pre-defined materials with a fixed, pre-recorded density. A part may
//! reference a standard alloy instead of carrying its own element
//! composition; density questions about such a part are answered by direct
//! lookup here rather than by blending.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{MetError, MetResult};

/// A standard alloy record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardAlloy {
    /// Unique alloy identifier
    pub id: Uuid,

    /// Alloy name (e.g. "316L Stainless", "Ti-6Al-4V")
    pub name: String,

    /// Density in g/cm³
    pub density_g_cm3: f64,
}

impl StandardAlloy {
    /// Create a new standard alloy record with a fresh identifier.
    pub fn new(name: impl Into<String>, density_g_cm3: f64) -> Self {
        StandardAlloy {
            id: Uuid::new_v4(),
            name: name.into(),
            density_g_cm3,
        }
    }
}

impl std::fmt::Display for StandardAlloy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (ρ={} g/cm³)", self.name, self.density_g_cm3)
    }
}

/// In-memory standard alloy catalog keyed by id.
#[derive(Debug, Clone, Default)]
pub struct AlloyDb {
    alloys: HashMap<Uuid, StandardAlloy>,
}

impl AlloyDb {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a standard alloy.
    ///
    /// Returns the alloy's id on success. Rejects an empty name, a
    /// non-positive or non-finite density, and a duplicate id.
    pub fn insert(&mut self, alloy: StandardAlloy) -> MetResult<Uuid> {
        if alloy.name.trim().is_empty() {
            return Err(MetError::missing_field("name"));
        }
        if !alloy.density_g_cm3.is_finite() || alloy.density_g_cm3 <= 0.0 {
            return Err(MetError::invalid_input(
                "density_g_cm3",
                alloy.density_g_cm3.to_string(),
                "Density must be a positive finite number",
            ));
        }
        if self.alloys.contains_key(&alloy.id) {
            return Err(MetError::invalid_operation(
                "insert_alloy",
                format!("Alloy id {} is already registered", alloy.id),
            ));
        }

        let id = alloy.id;
        self.alloys.insert(id, alloy);
        Ok(id)
    }

    /// Look up an alloy by id.
    pub fn get(&self, id: &Uuid) -> MetResult<&StandardAlloy> {
        self.alloys
            .get(id)
            .ok_or_else(|| MetError::alloy_not_found(id.to_string()))
    }

    /// All registered alloys, sorted by name for stable output.
    pub fn all(&self) -> Vec<&StandardAlloy> {
        let mut alloys: Vec<&StandardAlloy> = self.alloys.values().collect();
        alloys.sort_by(|a, b| a.name.cmp(&b.name));
        alloys
    }

    /// Get the number of registered alloys
    pub fn len(&self) -> usize {
        self.alloys.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.alloys.is_empty()
    }
}
