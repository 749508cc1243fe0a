//! tp-core: shared foundation for thermoprops.
//!
//! Contains:
//! - error (the single error taxonomy surfaced to callers)
//! - numeric (Real, tolerances, engine sentinel detection)
//! - timing (per-entry-point native call accumulators)

pub mod error;
pub mod numeric;
pub mod timing;

pub use error::{PropsError, PropsResult};
pub use numeric::*;
