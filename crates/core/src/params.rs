//! Helpers for reading pattern parameters from a `serde_json::Value` object.
//!
//! A missing key falls back to the default. A key holding the wrong JSON
//! type also falls back, with a warning logged so typos in a recipe are
//! visible under `RUST_LOG=warn`.

use log::warn;
use serde_json::Value;

use crate::error::HashtoneError;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or
/// not a number. JSON integers are accepted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    match params.get(name) {
        None | Some(Value::Null) => default,
        Some(v) => v.as_f64().unwrap_or_else(|| {
            warn!("parameter '{name}' is not a number ({v}); using default {default}");
            default
        }),
    }
}

/// Like [`param_f64`] but rejects values that are not finite and strictly
/// positive.
pub fn param_positive_f64(params: &Value, name: &str, default: f64) -> Result<f64, HashtoneError> {
    let v = param_f64(params, name, default);
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(HashtoneError::InvalidParam {
            name: name.to_owned(),
            reason: format!("must be a finite positive number, got {v}"),
        })
    }
}

/// Like [`param_f64`] but clamps the value into [0, 1].
pub fn param_unit_f64(params: &Value, name: &str, default: f64) -> f64 {
    param_f64(params, name, default).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- param_f64 --

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"scale": 2.5});
        assert_eq!(param_f64(&params, "scale", 1.0), 2.5);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"scale": 10});
        assert_eq!(param_f64(&params, "scale", 0.0), 10.0);
    }

    #[test]
    fn param_f64_returns_default_when_key_missing() {
        let params = json!({"other": 1.0});
        assert_eq!(param_f64(&params, "scale", 3.0), 3.0);
    }

    #[test]
    fn param_f64_returns_default_when_wrong_type() {
        let params = json!({"scale": "big"});
        assert_eq!(param_f64(&params, "scale", 1.0), 1.0);
    }

    #[test]
    fn param_f64_returns_default_for_null_value() {
        let params = json!({"scale": null});
        assert_eq!(param_f64(&params, "scale", 5.0), 5.0);
    }

    #[test]
    fn param_f64_returns_default_for_non_object() {
        let params = json!("not an object");
        assert_eq!(param_f64(&params, "scale", 7.0), 7.0);
    }

    // -- param_positive_f64 --

    #[test]
    fn param_positive_f64_accepts_positive() {
        let params = json!({"scale": 16});
        assert_eq!(param_positive_f64(&params, "scale", 1.0).unwrap(), 16.0);
    }

    #[test]
    fn param_positive_f64_uses_default_when_missing() {
        assert_eq!(param_positive_f64(&json!({}), "scale", 64.0).unwrap(), 64.0);
    }

    #[test]
    fn param_positive_f64_rejects_zero_and_negative() {
        for bad in [json!({"scale": 0}), json!({"scale": -3.5})] {
            let err = param_positive_f64(&bad, "scale", 1.0).unwrap_err();
            assert!(
                matches!(err, HashtoneError::InvalidParam { ref name, .. } if name == "scale"),
                "unexpected error: {err}"
            );
        }
    }

    // -- param_unit_f64 --

    #[test]
    fn param_unit_f64_clamps_into_unit_range() {
        let params = json!({"a": 1.7, "b": -0.2, "c": 0.4});
        assert_eq!(param_unit_f64(&params, "a", 0.5), 1.0);
        assert_eq!(param_unit_f64(&params, "b", 0.5), 0.0);
        assert_eq!(param_unit_f64(&params, "c", 0.5), 0.4);
    }
}
