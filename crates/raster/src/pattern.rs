//! The `Pattern` trait: a per-pixel color function over the unit square.
//!
//! The trait is object-safe so patterns can be used as `dyn Pattern` for
//! runtime selection, and `Send + Sync` so one pattern can be evaluated from
//! every fill worker at once.

use serde_json::Value;

/// A color function sampled once per pixel.
///
/// Implementations must be pure: the same `(x, y)` always gives the same
/// pixel. [`crate::fill`] relies on this to evaluate rows in any order.
pub trait Pattern: Send + Sync {
    /// Packed ARGB8888 color at `(x, y)`, where both coordinates are
    /// nominally in `[0, 1)`.
    fn argb(&self, x: f64, y: f64) -> u32;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges and
    /// defaults.
    fn param_schema(&self) -> Value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Solid-color pattern used to check trait object safety.
    struct Solid(u32);

    impl Pattern for Solid {
        fn argb(&self, _x: f64, _y: f64) -> u32 {
            self.0
        }

        fn params(&self) -> Value {
            json!({"argb": self.0})
        }

        fn param_schema(&self) -> Value {
            json!({
                "argb": {
                    "type": "integer",
                    "description": "Packed ARGB8888 color"
                }
            })
        }
    }

    #[test]
    fn pattern_trait_is_object_safe() {
        let pattern: Box<dyn Pattern> = Box::new(Solid(0xFF00_FF00));
        assert_eq!(pattern.argb(0.3, 0.7), 0xFF00_FF00);
    }

    #[test]
    fn dyn_pattern_reference_exposes_params() {
        let solid = Solid(7);
        let pattern: &dyn Pattern = &solid;
        assert_eq!(pattern.params()["argb"], 7);
        assert_eq!(pattern.param_schema()["argb"]["type"], "integer");
    }

    #[test]
    fn dyn_pattern_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Pattern>();
    }
}
