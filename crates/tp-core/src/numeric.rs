/// Floating point type used throughout system
pub type Real = f64;

/// Magnitude at or above which an engine return value is an error sentinel.
pub const SENTINEL_MAGNITUDE: Real = 1.0e308;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// True when the engine signalled failure through its numeric return channel.
///
/// The engine reports internal errors as NaN or as a value of magnitude
/// `>= 1e308` (typically `HUGE_VAL`), never through a separate status code.
#[inline]
pub fn is_sentinel(v: Real) -> bool {
    v.is_nan() || v.abs() >= SENTINEL_MAGNITUDE
}
