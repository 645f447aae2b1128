//! Chemical Element Catalog
//!
//! Element records and symbol-keyed lookup for composition resolution.
//! Densities are room-temperature values in g/cm³.
//!
//! The catalog is an in-memory map standing in for the element store of the
//! full records backend; the calculation core only ever reads from it. A
//! built-in table of common metallurgical elements is provided so the engine
//! is usable for demos and tests without administrative input.
//!
//! ## Example
//!
//! ```rust
//! use met_core::materials::builtin_elements;
//!
//! let db = builtin_elements();
//! let iron = db.get("Fe").unwrap();
//! assert_eq!(iron.atomic_number, 26);
//! assert!(iron.density_g_cm3 > 7.0);
//! ```

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{MetError, MetResult};

/// A chemical element record.
///
/// Immutable once registered; the symbol is the unique catalog key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Element symbol (e.g. "Fe", "Ni"); case-sensitive, unique
    pub symbol: String,

    /// Full element name (e.g. "Iron")
    pub name: String,

    /// Atomic number
    pub atomic_number: u32,

    /// Density in g/cm³
    pub density_g_cm3: f64,
}

impl Element {
    /// Create a new element record.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        atomic_number: u32,
        density_g_cm3: f64,
    ) -> Self {
        Element {
            symbol: symbol.into(),
            name: name.into(),
            atomic_number,
            density_g_cm3,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, Z={}, ρ={} g/cm³)",
            self.symbol, self.name, self.atomic_number, self.density_g_cm3
        )
    }
}

/// In-memory element catalog keyed by symbol.
#[derive(Debug, Clone, Default)]
pub struct ElementDb {
    elements: HashMap<String, Element>,
}

impl ElementDb {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element.
    ///
    /// Rejects records with an empty symbol or name, a zero atomic number,
    /// a non-positive or non-finite density, or a symbol already registered.
    pub fn insert(&mut self, element: Element) -> MetResult<()> {
        if element.symbol.trim().is_empty() {
            return Err(MetError::missing_field("symbol"));
        }
        if element.name.trim().is_empty() {
            return Err(MetError::missing_field("name"));
        }
        if element.atomic_number == 0 {
            return Err(MetError::invalid_input(
                "atomic_number",
                "0",
                "Atomic number must be positive",
            ));
        }
        if !element.density_g_cm3.is_finite() || element.density_g_cm3 <= 0.0 {
            return Err(MetError::invalid_input(
                "density_g_cm3",
                element.density_g_cm3.to_string(),
                "Density must be a positive finite number",
            ));
        }
        if self.elements.contains_key(&element.symbol) {
            return Err(MetError::invalid_operation(
                "insert_element",
                format!("Element '{}' is already registered", element.symbol),
            ));
        }

        self.elements.insert(element.symbol.clone(), element);
        Ok(())
    }

    /// Look up a single element by symbol.
    pub fn get(&self, symbol: &str) -> MetResult<&Element> {
        self.elements
            .get(symbol)
            .ok_or_else(|| MetError::element_not_found(vec![symbol.to_string()]))
    }

    /// Resolve a batch of symbols to densities in one call.
    ///
    /// Duplicate symbols in the request are fine (they resolve once). If any
    /// symbol is unknown the whole lookup fails with `ElementNotFound` naming
    /// exactly the missing symbols, determined by set difference - a partial
    /// result is never returned.
    pub fn lookup_by_symbols(&self, symbols: &[&str]) -> MetResult<HashMap<String, f64>> {
        let requested: BTreeSet<&str> = symbols.iter().copied().collect();

        let missing: Vec<String> = requested
            .iter()
            .filter(|s| !self.elements.contains_key(**s))
            .map(|s| s.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(MetError::element_not_found(missing));
        }

        Ok(requested
            .into_iter()
            .filter_map(|s| {
                self.elements
                    .get(s)
                    .map(|e| (e.symbol.clone(), e.density_g_cm3))
            })
            .collect())
    }

    /// All registered symbols, sorted for stable output.
    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.elements.keys().cloned().collect();
        symbols.sort();
        symbols
    }

    /// Get the number of registered elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

// ============================================================================
// Built-in Elements (for use without administrative input)
// ============================================================================

/// Common metallurgical elements: (symbol, name, atomic number, density g/cm³)
///
/// Densities are near-room-temperature handbook values.
static BUILTIN_ELEMENTS: Lazy<Vec<Element>> = Lazy::new(|| {
    let table: &[(&str, &str, u32, f64)] = &[
        ("C", "Carbon", 6, 2.267),
        ("Mg", "Magnesium", 12, 1.738),
        ("Al", "Aluminium", 13, 2.70),
        ("Si", "Silicon", 14, 2.329),
        ("Ti", "Titanium", 22, 4.506),
        ("V", "Vanadium", 23, 6.11),
        ("Cr", "Chromium", 24, 7.19),
        ("Mn", "Manganese", 25, 7.21),
        ("Fe", "Iron", 26, 7.874),
        ("Co", "Cobalt", 27, 8.90),
        ("Ni", "Nickel", 28, 8.908),
        ("Cu", "Copper", 29, 8.96),
        ("Zn", "Zinc", 30, 7.14),
        ("Zr", "Zirconium", 40, 6.52),
        ("Nb", "Niobium", 41, 8.57),
        ("Mo", "Molybdenum", 42, 10.28),
        ("Ag", "Silver", 47, 10.49),
        ("Sn", "Tin", 50, 7.287),
        ("W", "Tungsten", 74, 19.25),
        ("Au", "Gold", 79, 19.30),
        ("Pb", "Lead", 82, 11.34),
    ];

    table
        .iter()
        .map(|(symbol, name, z, density)| Element::new(*symbol, *name, *z, *density))
        .collect()
});

/// Get a catalog pre-loaded with common metallurgical elements.
pub fn builtin_elements() -> ElementDb {
    let mut db = ElementDb::new();
    for element in BUILTIN_ELEMENTS.iter() {
        // Seed data is statically valid, so insertion cannot fail.
        let _ = db.insert(element.clone());
    }
    db
}
