//! # met_core - Metallurgical Density Calculation Engine
//!
//! `met_core` is the computational heart of Densimet: part records built
//! from chemical elements or standard alloys, and the density calculations
//! over them. All inputs and outputs are JSON-serializable, errors are
//! structured, and every calculation is a pure function.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: calculations take resolved inputs and return results
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Strict Boundary**: external strings are parsed and validated once,
//!   so formulas only ever see finite numbers
//!
//! ## Quick Start
//!
//! ```rust
//! use met_core::calculations::specific_density;
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
//!     "Turbine Disc",
//!     Uuid::new_v4(),
//!     vec![
//!         CompositionEntry::new("Fe", 70.0),
//!         CompositionEntry::new("Ni", 30.0),
//!     ],
//! );
//!
//! let resolved = resolve_for_part(&part, &alloys, &elements).unwrap();
//! let density = specific_density(&resolved).unwrap();
//! assert!(density > 7.87 && density < 8.908);
//! ```
//!
//! ## Modules
//!
//! - [`materials`] - element and standard-alloy catalogs
//! - [`parts`] - part records and the in-memory registry
//! - [`composition`] - composition resolution and replacement
//! - [`calculations`] - the pure density formulas
//! - [`requests`] - string-parameter parsing and presentation formatting
//! - [`errors`] - structured error types

pub mod calculations;
pub mod composition;
pub mod errors;
pub mod materials;
pub mod parts;
pub mod requests;

// Re-export commonly used types at crate root for convenience
pub use composition::{replace_composition, resolve_for_part, DensityEntry};
pub use errors::{MetError, MetResult};
pub use materials::{builtin_elements, AlloyDb, Element, ElementDb, StandardAlloy};
pub use parts::{Composition, CompositionEntry, Part, PartDb};
