//! The narrow call surface of the native property engine.

use tp_core::PropsResult;

/// Synchronous property engine with the six CoolProp C-ABI operations.
///
/// Implementations return the engine's raw answer: numeric sentinels and
/// empty strings are passed through untouched and judged by
/// [`crate::classify`]. An `Err` here means the call could not be made at all
/// (an argument with an interior NUL, or an optional export that is absent).
pub trait Engine: Send + Sync {
    /// Two-input state query, e.g. `("D", "T", 300.0, "P", 101325.0, "Water")`.
    fn props_si(
        &self,
        output: &str,
        name1: &str,
        value1: f64,
        name2: &str,
        value2: f64,
        fluid: &str,
    ) -> PropsResult<f64>;

    /// Single-input (trivial) query such as a critical constant.
    fn props1_si(&self, output: &str, fluid: &str) -> PropsResult<f64>;

    /// Phase name of a state, `None` when the engine produced nothing.
    fn phase_si(
        &self,
        name1: &str,
        value1: f64,
        name2: &str,
        value2: f64,
        fluid: &str,
    ) -> PropsResult<Option<String>>;

    /// Three-input humid-air query.
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
    ) -> PropsResult<f64>;

    /// Global parameter string (`version`, `gitrevision`, `errstring`, ...).
    fn global_param_string(&self, param: &str) -> PropsResult<Option<String>>;

    /// Per-fluid parameter string (`CAS`, `aliases`, `formula`, ...).
    fn fluid_param_string(&self, fluid: &str, param: &str) -> PropsResult<Option<String>>;
}
