//! # Materials Catalogs
//!
//! Element and standard-alloy records with in-memory lookup. These catalogs
//! stand in for the record stores of the full backend: created once via
//! administrative input, read many times by composition resolution and the
//! density calculations. The core never writes to them during a calculation.
//!
//! ## Example
//!
//! ```rust
//! use met_core::materials::{builtin_elements, AlloyDb, StandardAlloy};
//!
//! let elements = builtin_elements();
//! let nickel = elements.get("Ni").unwrap();
//! assert_eq!(nickel.name, "Nickel");
//!
//! let mut alloys = AlloyDb::new();
//! let id = alloys.insert(StandardAlloy::new("316L Stainless", 7.99)).unwrap();
//! assert_eq!(alloys.get(&id).unwrap().density_g_cm3, 7.99);
//! ```

pub mod alloys;
pub mod elements;

pub use alloys::{AlloyDb, StandardAlloy};
pub use elements::{builtin_elements, Element, ElementDb};
