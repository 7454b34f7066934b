//! LORENE Domain Layer
//!
//! This crate defines the record produced for one LORENE `nrotdiff` output
//! file and the rules that fill in its derived quantities. It knows nothing
//! about regular expressions, files or output formats.
//!
//! ## Key Concepts
//!
//! - **Field**: one named physical quantity (`M_grav`, `R_circ`, `T_W`, ...)
//! - **Model record**: identification strings plus one optional slot per field
//! - **Derived field**: binding energy and polar radius, computed from
//!   already-extracted fields
//!
//! ## Missing vs. zero
//!
//! Slots are `Option<f64>` internally, so an absent measurement is never
//! mistaken for a measured zero when deriving. The 0.0 default only appears
//! at the output boundary ([`NeutronStarModel::value`] and serialization).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod field;
pub mod model;

// Re-exports for convenience
pub use field::Field;
pub use model::NeutronStarModel;
