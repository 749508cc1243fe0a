//! tp-fluids: identifier and unit normalization for thermoprops.
//!
//! Provides:
//! - Alias tables for property codes, fluid names and humid-air codes
//! - Quantity categories and engineering <-> SI conversion
//! - Mixture specification strings (`HEOS::A[x]&B[y]`)
//!
//! Nothing here talks to the native engine; every function is pure.
//!
//! # Example
//!
//! ```
//! use tp_fluids::{QuantityCategory, classify, resolve_fluid, resolve_property, to_si};
//!
//! let output = resolve_property("TCRIT");
//! assert_eq!(output, "Tcrit");
//! assert_eq!(classify(&output), QuantityCategory::Temperature);
//! assert_eq!(resolve_fluid("R-134a"), "R134a");
//! assert!((to_si(QuantityCategory::Pressure, 1.0) - 1.0e5).abs() < 1e-9);
//! ```

pub mod aliases;
pub mod mixture;
pub mod units;

pub use aliases::{
    AliasTable, Vocabulary, resolve, resolve_fluid, resolve_humid_air, resolve_property,
};
pub use mixture::{Component, HEOS_PREFIX, Mixture, MixtureBuilder, is_mixture};
pub use units::{QuantityCategory, UnitSystem, classify, from_si, to_si};
