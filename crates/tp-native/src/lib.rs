//! tp-native: binding to the CoolProp shared library.
//!
//! Contains:
//! - engine (the six-operation call surface as a trait)
//! - binding (libloading-backed implementation)
//! - search and platform (where and how the library is opened)
//! - classify (sentinel and empty-string failure detection)
//! - config (library location settings)
//!
//! The library is resolved and bound at most once per process. A failure is
//! cached and every later call receives the same error.

pub mod binding;
pub mod classify;
pub mod config;
pub mod engine;
pub mod platform;
pub mod search;

pub use binding::NativeEngine;
pub use classify::{check_string, check_value, last_error};
pub use config::EngineConfig;
pub use engine::Engine;
pub use search::{Candidate, CandidateSource, SearchReport};

use std::sync::OnceLock;
use tp_core::PropsResult;

static CONFIG: OnceLock<EngineConfig> = OnceLock::new();
static ENGINE: OnceLock<PropsResult<NativeEngine>> = OnceLock::new();

/// Install the configuration used for the first load.
///
/// Returns `false` when a configuration is already fixed, either by an earlier
/// call or because the engine has been used.
pub fn configure(config: EngineConfig) -> bool {
    if ENGINE.get().is_some() {
        return false;
    }
    CONFIG.set(config).is_ok()
}

/// Active configuration; environment defaults when none was installed.
pub fn config() -> &'static EngineConfig {
    CONFIG.get_or_init(EngineConfig::from_env)
}

/// The process-wide engine, loading it on first use.
pub fn engine() -> PropsResult<&'static NativeEngine> {
    ENGINE
        .get_or_init(|| NativeEngine::load(config()))
        .as_ref()
        .map_err(Clone::clone)
}

/// Search results for the active configuration. Never loads the library.
pub fn diagnostics() -> SearchReport {
    search::scan(config())
}
