//! LORENE Extractor
//!
//! Pulls physical quantities out of LORENE `nrotdiff` output (`resu.d`) with
//! a fixed table of case-insensitive regular expressions.
//!
//! # Overview
//!
//! The input has no grammar worth parsing: values are printed in free-form
//! lines such as `Gravitational mass : 1.40 Msun`. Each row of the pattern
//! table finds one quantity anywhere in the text and captures its number.
//! Unmatched quantities stay absent. Binding energy and polar radius are
//! derived once extraction is done.
//!
//! # Architecture
//!
//! ```text
//! text → Extractor (PatternTable) → NeutronStarModel → derive()
//! ```
//!
//! # Example Usage
//!
//! ```
//! use lorene_extractor::Extractor;
//! use lorene_domain::Field;
//!
//! let extractor = Extractor::default_config().unwrap();
//! let model = extractor
//!     .extract("resu.d", "Gravitational mass : 1.40 Msun\nBaryonic mass : 1.62 Msun")
//!     .unwrap();
//!
//! assert_eq!(model.value(Field::MGrav), 1.40);
//! assert!((model.value(Field::MBinding) - 0.22).abs() < 1e-12);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod patterns;


pub use config::{ExtractorConfig, PatternOverride};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use patterns::{CompiledPattern, FieldPattern, PatternTable, DEFAULT_PATTERNS};
