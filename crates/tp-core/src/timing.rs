//! Lightweight native call timing.
//!
//! Every call across the C boundary can be accumulated per entry point.
//! Disabled by default; enable via the `TP_TIMING` environment variable or
//! programmatically.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);
static ENV_ENABLED: OnceLock<bool> = OnceLock::new();

/// Enable performance timing globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Disable performance timing globally.
pub fn disable_timing() {
    ENABLED.store(false, Ordering::Relaxed);
}

/// Check if timing is enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
        || *ENV_ENABLED.get_or_init(|| std::env::var_os("TP_TIMING").is_some())
}

/// Accumulating timer for tracking total time across multiple calls.
pub struct AccumulatingTimer {
    total_ns: AtomicU64,
    count: AtomicU64,
}

impl Default for AccumulatingTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl AccumulatingTimer {
    /// Create a new accumulating timer.
    pub const fn new() -> Self {
        Self {
            total_ns: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Record a timing measurement.
    pub fn record(&self, duration_s: f64) {
        let nanos = (duration_s * 1e9) as u64;
        self.total_ns.fetch_add(nanos, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the time elapsed since `start`, if timing is enabled.
    pub fn record_since(&self, start: Instant) {
        if is_enabled() {
            self.record(start.elapsed().as_secs_f64());
        }
    }

    /// Get total time spent (in seconds).
    pub fn total_seconds(&self) -> f64 {
        self.total_ns.load(Ordering::Relaxed) as f64 / 1e9
    }

    /// Get number of calls.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Get average time per call (in seconds).
    pub fn average_seconds(&self) -> f64 {
        let count = self.count();
        if count > 0 {
            self.total_seconds() / count as f64
        } else {
            0.0
        }
    }

    /// Reset the timer.
    pub fn reset(&self) {
        self.total_ns.store(0, Ordering::Relaxed);
        self.count.store(0, Ordering::Relaxed);
    }
}

/// Per-entry-point timers for calls into the native engine.
pub mod native_timing {
    use super::AccumulatingTimer;

    pub static PROPS_SI: AccumulatingTimer = AccumulatingTimer::new();
    pub static PROPS1_SI: AccumulatingTimer = AccumulatingTimer::new();
    pub static PHASE_SI: AccumulatingTimer = AccumulatingTimer::new();
    pub static HA_PROPS_SI: AccumulatingTimer = AccumulatingTimer::new();
    pub static GLOBAL_PARAM: AccumulatingTimer = AccumulatingTimer::new();
    pub static FLUID_PARAM: AccumulatingTimer = AccumulatingTimer::new();
    /// Library resolution and symbol binding (recorded at most once).
    pub static BIND: AccumulatingTimer = AccumulatingTimer::new();

    fn all() -> [(&'static str, &'static AccumulatingTimer); 7] {
        [
            ("bind", &BIND),
            ("PropsSI", &PROPS_SI),
            ("Props1SI", &PROPS1_SI),
            ("PhaseSI", &PHASE_SI),
            ("HAPropsSI", &HA_PROPS_SI),
            ("get_global_param_string", &GLOBAL_PARAM),
            ("get_fluid_param_string", &FLUID_PARAM),
        ]
    }

    /// Reset all native timers.
    pub fn reset_all() {
        for (_, timer) in all() {
            timer.reset();
        }
    }

    /// Format a summary of every entry point that was called at least once.
    pub fn summary() -> String {
        let mut out = String::from("=== Native Call Breakdown ===\n");
        let mut total = 0.0;
        for (label, timer) in all() {
            let count = timer.count();
            if count == 0 {
                continue;
            }
            total += timer.total_seconds();
            out.push_str(&format!(
                "{:<26} {} calls, {:.3}s total, {:.4}ms avg\n",
                label,
                count,
                timer.total_seconds(),
                timer.average_seconds() * 1000.0
            ));
        }
        out.push_str(&format!("TOTAL native time: {:.3}s\n", total));
        out
    }
}
