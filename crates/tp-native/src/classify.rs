//! Turning raw engine answers into values or diagnosed failures.

use crate::engine::Engine;
use tp_core::{PropsError, PropsResult, is_sentinel};

/// Global parameter holding the engine's last error text.
pub const ERROR_PARAM: &str = "errstring";

/// Substituted when the engine has no error text to offer.
pub const UNKNOWN_ERROR: &str = "Unknown CoolProp error (no error details available)";

/// Fetch the engine's last error text, trimmed.
///
/// Never fails: a failed or empty retrieval yields [`UNKNOWN_ERROR`].
pub fn last_error(engine: &dyn Engine) -> String {
    match engine.global_param_string(ERROR_PARAM) {
        Ok(Some(text)) if !text.trim().is_empty() => text.trim().to_string(),
        _ => UNKNOWN_ERROR.to_string(),
    }
}

/// Accept a numeric result or classify it as a computation failure.
pub fn check_value(engine: &dyn Engine, raw: f64) -> PropsResult<f64> {
    if is_sentinel(raw) {
        let message = last_error(engine);
        tracing::debug!(raw, %message, "engine returned a failure sentinel");
        return Err(PropsError::ComputationFailure {
            index: None,
            message,
        });
    }
    Ok(raw)
}

/// Accept a string result or classify it as a failed string query.
pub fn check_string(engine: &dyn Engine, what: &str, raw: Option<String>) -> PropsResult<String> {
    match raw {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => {
            let message = last_error(engine);
            tracing::debug!(what, %message, "string query produced nothing");
            Err(PropsError::StringQueryFailure {
                what: what.to_string(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub {
        errstring: Option<&'static str>,
    }

    impl Engine for Stub {
        fn props_si(&self, _: &str, _: &str, _: f64, _: &str, _: f64, _: &str) -> PropsResult<f64> {
            Ok(0.0)
        }
        fn props1_si(&self, _: &str, _: &str) -> PropsResult<f64> {
            Ok(0.0)
        }
        fn phase_si(
            &self,
            _: &str,
            _: f64,
            _: &str,
            _: f64,
            _: &str,
        ) -> PropsResult<Option<String>> {
            Ok(None)
        }
        fn ha_props_si(
            &self,
            _: &str,
            _: &str,
            _: f64,
            _: &str,
            _: f64,
            _: &str,
            _: f64,
        ) -> PropsResult<f64> {
            Ok(0.0)
        }
        fn global_param_string(&self, param: &str) -> PropsResult<Option<String>> {
            assert_eq!(param, ERROR_PARAM);
            Ok(self.errstring.map(str::to_string))
        }
        fn fluid_param_string(&self, _: &str, _: &str) -> PropsResult<Option<String>> {
            Ok(None)
        }
    }

    #[test]
    fn finite_values_pass() {
        let stub = Stub { errstring: None };
        assert_eq!(check_value(&stub, 998.2).unwrap(), 998.2);
        assert_eq!(check_value(&stub, -1.0e307).unwrap(), -1.0e307);
    }

    #[test]
    fn sentinels_carry_engine_text() {
        let stub = Stub {
            errstring: Some("  Input pair variable is invalid \n"),
        };
        let huge: f64 = "1.0e309".parse().unwrap();
        for raw in [f64::NAN, huge, -huge, 1.0e308] {
            let err = check_value(&stub, raw).unwrap_err();
            assert_eq!(
                err,
                PropsError::ComputationFailure {
                    index: None,
                    message: "Input pair variable is invalid".into()
                }
            );
        }
    }

    #[test]
    fn blank_engine_text_falls_back() {
        let stub = Stub {
            errstring: Some("   "),
        };
        assert_eq!(last_error(&stub), UNKNOWN_ERROR);
        let stub = Stub { errstring: None };
        let err = check_value(&stub, f64::NAN).unwrap_err();
        assert!(err.to_string().contains(UNKNOWN_ERROR));
    }

    #[test]
    fn empty_strings_are_failures() {
        let stub = Stub {
            errstring: Some("Fluid not found"),
        };
        assert_eq!(
            check_string(&stub, "phase", Some("twophase".into())).unwrap(),
            "twophase"
        );
        let err = check_string(&stub, "phase", Some(String::new())).unwrap_err();
        assert_eq!(err.to_string(), "Failed to retrieve phase. Fluid not found");
        assert!(check_string(&stub, "phase", None).is_err());
        assert!(check_string(&stub, "phase", Some(" \n\t".into())).is_err());
    }
}
