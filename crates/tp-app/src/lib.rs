//! tp-app: the surface the calling environment sees.
//!
//! Contains:
//! - value (cells, arguments and results)
//! - broadcast (element-wise evaluation with shape checks)
//! - functions (every property, phase, parameter and mixture operation)

pub mod broadcast;
pub mod functions;
pub mod value;

pub use broadcast::broadcast;
pub use functions::{Session, mixture_string};
pub use tp_core::{PropsError, PropsResult};
pub use tp_native::{SearchReport, diagnostics};
pub use value::{Arg, CellValue, Evaluated, Orientation};

/// Session bound to the process-wide native engine, loading it on first use.
pub fn session() -> PropsResult<Session<'static>> {
    let engine = tp_native::engine()?;
    Ok(Session::new(engine))
}
