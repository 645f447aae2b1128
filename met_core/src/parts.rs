//! # Part Records
//!
//! A manufactured part is identified by its part code and declares its
//! material in exactly one of two ways: a custom element composition (mass
//! percentages) or a reference to a standard alloy. The two modes are a
//! tagged union, so a part can never carry both at once and consistency
//! needs no ad-hoc checking downstream.
//!
//! ## JSON Serialization
//!
//! The composition serializes with a "mode" discriminator:
//!
//! ```json
//! // Custom composition
//! { "mode": "Custom", "entries": [ { "symbol": "Fe", "mass_percent": 70.0 },
//!                                  { "symbol": "Ni", "mass_percent": 30.0 } ] }
//!
//! // Standard alloy reference
//! { "mode": "StandardAlloy", "alloy_id": "7f8c2c0e-..." }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::errors::{MetError, MetResult};
use crate::materials::{AlloyDb, ElementDb};

/// One element of a custom composition: a symbol and its share of the
/// part's mass, in percent. Expected (not enforced) to sum to 100 across
/// a part's entries; duplicate symbols are legal and kept distinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionEntry {
    /// Element symbol (e.g. "Fe")
    pub symbol: String,

    /// Mass percentage in (0, 100]
    pub mass_percent: f64,
}

impl CompositionEntry {
    /// Create a composition entry.
    pub fn new(symbol: impl Into<String>, mass_percent: f64) -> Self {
        CompositionEntry {
            symbol: symbol.into(),
            mass_percent,
        }
    }
}

/// How a part declares its material - exactly one of the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum Composition {
    /// Per-element composition by mass percentage
    Custom { entries: Vec<CompositionEntry> },

    /// Reference to a standard alloy with a pre-recorded density
    StandardAlloy { alloy_id: Uuid },
}

/// A manufactured part record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Unique part code (registry key)
    pub part_code: String,

    /// Human-readable part name
    pub part_name: String,

    /// Owning user/account
    pub owner: Uuid,

    /// Declared material (custom composition or standard alloy)
    pub composition: Composition,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// Last-modified timestamp
    pub modified: DateTime<Utc>,
}

impl Part {
    /// Create a part with a custom element composition.
    pub fn new_custom(
        part_code: impl Into<String>,
        part_name: impl Into<String>,
        owner: Uuid,
        entries: Vec<CompositionEntry>,
    ) -> Self {
        let now = Utc::now();
        Part {
            part_code: part_code.into(),
            part_name: part_name.into(),
            owner,
            composition: Composition::Custom { entries },
            created: now,
            modified: now,
        }
    }

    /// Create a part backed by a standard alloy.
    pub fn new_standard_alloy(
        part_code: impl Into<String>,
        part_name: impl Into<String>,
        owner: Uuid,
        alloy_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Part {
            part_code: part_code.into(),
            part_name: part_name.into(),
            owner,
            composition: Composition::StandardAlloy { alloy_id },
            created: now,
            modified: now,
        }
    }

    /// The referenced standard alloy id, if this part is alloy-backed.
    pub fn alloy_id(&self) -> Option<Uuid> {
        match &self.composition {
            Composition::StandardAlloy { alloy_id } => Some(*alloy_id),
            Composition::Custom { .. } => None,
        }
    }

    /// Check if this part references a standard alloy
    pub fn is_alloy_backed(&self) -> bool {
        matches!(self.composition, Composition::StandardAlloy { .. })
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

/// In-memory part registry keyed by part code.
///
/// Stands in for the persistence collaborator: creation is referentially
/// validated against the catalogs, and `save` commits a whole record at a
/// time (the per-document update semantics the core relies on).
#[derive(Debug, Clone, Default)]
pub struct PartDb {
    parts: HashMap<String, Part>,
}

impl PartDb {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new part record.
    ///
    /// Validates required fields, rejects duplicate part codes, and checks
    /// the declared material referentially: an alloy-backed part's alloy
    /// must exist, and a custom part's composition must be non-empty with
    /// every symbol resolvable.
    pub fn add(&mut self, part: Part, elements: &ElementDb, alloys: &AlloyDb) -> MetResult<()> {
        if part.part_code.trim().is_empty() {
            return Err(MetError::missing_field("part_code"));
        }
        if part.part_name.trim().is_empty() {
            return Err(MetError::missing_field("part_name"));
        }
        if self.parts.contains_key(&part.part_code) {
            return Err(MetError::invalid_operation(
                "add_part",
                format!("Part code '{}' is already registered", part.part_code),
            ));
        }

        match &part.composition {
            Composition::StandardAlloy { alloy_id } => {
                alloys.get(alloy_id)?;
            }
            Composition::Custom { entries } => {
                if entries.is_empty() {
                    return Err(MetError::invalid_composition(
                        "Composition must contain at least one entry",
                    ));
                }
                let symbols: Vec<&str> = entries.iter().map(|e| e.symbol.as_str()).collect();
                elements.lookup_by_symbols(&symbols)?;
            }
        }

        self.save(part);
        Ok(())
    }

    /// Commit a part record, replacing any existing record with the same
    /// part code in a single swap.
    pub fn save(&mut self, part: Part) {
        self.parts.insert(part.part_code.clone(), part);
    }

    /// Look up a part by its code.
    pub fn find_by_code(&self, part_code: &str) -> MetResult<&Part> {
        self.parts
            .get(part_code)
            .ok_or_else(|| MetError::part_not_found(part_code))
    }

    /// Mutable lookup, for composition replacement.
    pub fn find_by_code_mut(&mut self, part_code: &str) -> MetResult<&mut Part> {
        self.parts
            .get_mut(part_code)
            .ok_or_else(|| MetError::part_not_found(part_code))
    }

    /// Part name for a code.
    pub fn part_name(&self, part_code: &str) -> MetResult<&str> {
        Ok(self.find_by_code(part_code)?.part_name.as_str())
    }

    /// All part codes owned by a user, sorted for stable output.
    pub fn codes_for_owner(&self, owner: &Uuid) -> Vec<String> {
        let mut codes: Vec<String> = self
            .parts
            .values()
            .filter(|p| p.owner == *owner)
            .map(|p| p.part_code.clone())
            .collect();
        codes.sort();
        codes
    }

    /// Get the number of registered parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
