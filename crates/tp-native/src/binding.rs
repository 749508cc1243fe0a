//! CoolProp shared library bound through `libloading`.

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::platform;
use crate::search;
use libloading::Library;
use std::ffi::{CString, c_char, c_double, c_int, c_long};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tp_core::timing::native_timing;
use tp_core::{PropsError, PropsResult};

/// Buffer capacity for phase names and fluid parameters.
pub const SHORT_BUFFER: usize = 2000;
/// Buffer capacity for global parameters (build text can be long).
pub const LONG_BUFFER: usize = 10000;

type PropsSiFn = unsafe extern "C" fn(
    *const c_char,
    *const c_char,
    c_double,
    *const c_char,
    c_double,
    *const c_char,
) -> c_double;
type Props1SiFn = unsafe extern "C" fn(*const c_char, *const c_char) -> c_double;
type PhaseSiFn = unsafe extern "C" fn(
    *const c_char,
    c_double,
    *const c_char,
    c_double,
    *const c_char,
    *mut c_char,
    c_int,
) -> c_long;
type HaPropsSiFn = unsafe extern "C" fn(
    *const c_char,
    *const c_char,
    c_double,
    *const c_char,
    c_double,
    *const c_char,
    c_double,
) -> c_double;
type GlobalParamFn = unsafe extern "C" fn(*const c_char, *mut c_char, c_int) -> c_long;
type FluidParamFn =
    unsafe extern "C" fn(*const c_char, *const c_char, *mut c_char, c_int) -> c_long;

/// Loaded library plus its bound entry points.
///
/// The function pointers stay valid for as long as `_library` is alive; the
/// process-wide instance is never dropped.
pub struct NativeEngine {
    props_si: PropsSiFn,
    props1_si: Props1SiFn,
    ha_props_si: HaPropsSiFn,
    global_param: GlobalParamFn,
    phase_si: Option<PhaseSiFn>,
    fluid_param: Option<FluidParamFn>,
    origin: PathBuf,
    _library: Library,
}

impl std::fmt::Debug for NativeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeEngine")
            .field("origin", &self.origin)
            .field("phase_si", &self.phase_si.is_some())
            .field("fluid_param", &self.fluid_param.is_some())
            .finish_non_exhaustive()
    }
}

impl NativeEngine {
    /// Find, open and bind the library described by `config`.
    ///
    /// Candidate directories are tried in order; a file that exists but fails
    /// to open does not stop the search. The system's default search for the
    /// bare filename is the last resort.
    pub fn load(config: &EngineConfig) -> PropsResult<Self> {
        let start = Instant::now();
        let report = search::scan(config);
        tracing::debug!(
            library = %report.library_file,
            candidates = report.candidates.len(),
            "resolving native library"
        );

        for candidate in report.candidates.iter().filter(|c| c.found) {
            // SAFETY: CoolProp's initialisers have no preconditions.
            match unsafe { platform::open_in_dir(&candidate.dir, &candidate.library_path) } {
                Ok(library) => {
                    let engine = Self::bind(library, candidate.library_path.clone());
                    native_timing::BIND.record_since(start);
                    return engine;
                }
                Err(e) => tracing::warn!(
                    path = %candidate.library_path.display(),
                    error = %e,
                    "library present but failed to load"
                ),
            }
        }

        // SAFETY: as above.
        match unsafe { platform::open_default(&report.library_file) } {
            Ok(library) => {
                let engine = Self::bind(library, PathBuf::from(&report.library_file));
                native_timing::BIND.record_since(start);
                engine
            }
            Err(e) => {
                tracing::warn!(
                    library = %report.library_file,
                    error = %e,
                    "native library not found"
                );
                Err(PropsError::LibraryNotFound {
                    library: report.library_file,
                    searched: report.candidates.into_iter().map(|c| c.dir).collect(),
                })
            }
        }
    }

    fn bind(library: Library, origin: PathBuf) -> PropsResult<Self> {
        let engine = Self {
            props_si: required(&library, "PropsSI")?,
            props1_si: required(&library, "Props1SI")?,
            ha_props_si: required(&library, "HAPropsSI")?,
            global_param: required(&library, "get_global_param_string")?,
            phase_si: optional(&library, "PhaseSI"),
            fluid_param: optional(&library, "get_fluid_param_string"),
            origin,
            _library: library,
        };
        tracing::info!(
            origin = %engine.origin.display(),
            phase = engine.phase_si.is_some(),
            fluid_param = engine.fluid_param.is_some(),
            "CoolProp bound"
        );
        Ok(engine)
    }

    /// Path (or bare filename) the library was opened from.
    pub fn origin(&self) -> &Path {
        &self.origin
    }
}

fn optional<T: Copy>(library: &Library, symbol: &str) -> Option<T> {
    // SAFETY: each call site names T as the exact C signature CoolProp
    // exports under `symbol`.
    unsafe { library.get::<T>(symbol.as_bytes()) }
        .ok()
        .map(|s| *s)
}

fn required<T: Copy>(library: &Library, symbol: &'static str) -> PropsResult<T> {
    optional(library, symbol).ok_or_else(|| {
        tracing::warn!(symbol, "mandatory entry point missing");
        PropsError::EntryPointMissing { symbol }
    })
}

fn c_arg(s: &str) -> PropsResult<CString> {
    CString::new(s).map_err(|_| PropsError::TypeMismatch {
        what: format!("Argument '{}' contains a NUL character.", s.escape_debug()),
    })
}

/// Text the engine wrote into `buf`, up to the first NUL.
fn read_buffer(buf: &[u8], code: c_long) -> Option<String> {
    if code == 0 {
        return None;
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    let text = String::from_utf8_lossy(&buf[..end]).into_owned();
    (!text.is_empty()).then_some(text)
}

impl Engine for NativeEngine {
    fn props_si(
        &self,
        output: &str,
        name1: &str,
        value1: f64,
        name2: &str,
        value2: f64,
        fluid: &str,
    ) -> PropsResult<f64> {
        let output = c_arg(output)?;
        let (name1, name2, fluid) = (c_arg(name1)?, c_arg(name2)?, c_arg(fluid)?);
        let start = Instant::now();
        // SAFETY: all pointers are live NUL-terminated strings for the call.
        let value = unsafe {
            (self.props_si)(
                output.as_ptr(),
                name1.as_ptr(),
                value1,
                name2.as_ptr(),
                value2,
                fluid.as_ptr(),
            )
        };
        native_timing::PROPS_SI.record_since(start);
        Ok(value)
    }

    fn props1_si(&self, output: &str, fluid: &str) -> PropsResult<f64> {
        let (output, fluid) = (c_arg(output)?, c_arg(fluid)?);
        let start = Instant::now();
        // SAFETY: both pointers are live NUL-terminated strings for the call.
        let value = unsafe { (self.props1_si)(output.as_ptr(), fluid.as_ptr()) };
        native_timing::PROPS1_SI.record_since(start);
        Ok(value)
    }

    fn phase_si(
        &self,
        name1: &str,
        value1: f64,
        name2: &str,
        value2: f64,
        fluid: &str,
    ) -> PropsResult<Option<String>> {
        let phase_si = self
            .phase_si
            .ok_or(PropsError::EntryPointMissing { symbol: "PhaseSI" })?;
        let (name1, name2, fluid) = (c_arg(name1)?, c_arg(name2)?, c_arg(fluid)?);
        let mut buf = vec![0u8; SHORT_BUFFER];
        let start = Instant::now();
        // SAFETY: the engine writes at most `SHORT_BUFFER` bytes into `buf`.
        let code = unsafe {
            phase_si(
                name1.as_ptr(),
                value1,
                name2.as_ptr(),
                value2,
                fluid.as_ptr(),
                buf.as_mut_ptr().cast::<c_char>(),
                SHORT_BUFFER as c_int,
            )
        };
        native_timing::PHASE_SI.record_since(start);
        Ok(read_buffer(&buf, code))
    }

    #[allow(clippy::too_many_arguments)]
    fn ha_props_si(
        &self,
        output: &str,
        name1: &str,
        value1: f64,
        name2: &str,
        value2: f64,
        name3: &str,
        value3: f64,
    ) -> PropsResult<f64> {
        let output = c_arg(output)?;
        let (name1, name2, name3) = (c_arg(name1)?, c_arg(name2)?, c_arg(name3)?);
        let start = Instant::now();
        // SAFETY: all pointers are live NUL-terminated strings for the call.
        let value = unsafe {
            (self.ha_props_si)(
                output.as_ptr(),
                name1.as_ptr(),
                value1,
                name2.as_ptr(),
                value2,
                name3.as_ptr(),
                value3,
            )
        };
        native_timing::HA_PROPS_SI.record_since(start);
        Ok(value)
    }

    fn global_param_string(&self, param: &str) -> PropsResult<Option<String>> {
        let param = c_arg(param)?;
        let mut buf = vec![0u8; LONG_BUFFER];
        let start = Instant::now();
        // SAFETY: the engine writes at most `LONG_BUFFER` bytes into `buf`.
        let code = unsafe {
            (self.global_param)(
                param.as_ptr(),
                buf.as_mut_ptr().cast::<c_char>(),
                LONG_BUFFER as c_int,
            )
        };
        native_timing::GLOBAL_PARAM.record_since(start);
        Ok(read_buffer(&buf, code))
    }

    fn fluid_param_string(&self, fluid: &str, param: &str) -> PropsResult<Option<String>> {
        let fluid_param = self.fluid_param.ok_or(PropsError::EntryPointMissing {
            symbol: "get_fluid_param_string",
        })?;
        let (fluid, param) = (c_arg(fluid)?, c_arg(param)?);
        let mut buf = vec![0u8; SHORT_BUFFER];
        let start = Instant::now();
        // SAFETY: the engine writes at most `SHORT_BUFFER` bytes into `buf`.
        let code = unsafe {
            fluid_param(
                fluid.as_ptr(),
                param.as_ptr(),
                buf.as_mut_ptr().cast::<c_char>(),
                SHORT_BUFFER as c_int,
            )
        };
        native_timing::FLUID_PARAM.record_since(start);
        Ok(read_buffer(&buf, code))
    }
}
