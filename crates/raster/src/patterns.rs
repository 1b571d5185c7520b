//! Built-in patterns composed from the core hash, color and packing
//! primitives.
//!
//! - [`WhiteNoise`]: grayscale value per grid cell from `unit_hash3`.
//! - [`HueNoise`]: random hue per grid cell at fixed saturation/lightness.
//! - [`Gradient`]: red follows x, green follows y.
//! - [`HslWheel`]: hue follows x, lightness follows y.

use hashtone_core::color::Hsl;
use hashtone_core::error::HashtoneError;
use hashtone_core::hash::unit_hash3;
use hashtone_core::pack::to_argb;
use hashtone_core::params::{param_f64, param_positive_f64, param_unit_f64};
use serde_json::{json, Value};

use crate::pattern::Pattern;

/// Default number of grid cells across the unit square.
const DEFAULT_SCALE: f64 = 64.0;
/// Default third hash coordinate; changing it reshuffles every cell.
const DEFAULT_SEED: f64 = 0.0;
const DEFAULT_SATURATION: f64 = 0.8;
const DEFAULT_LIGHTNESS: f64 = 0.5;
const DEFAULT_WHEEL_SATURATION: f64 = 1.0;

/// Grid cell containing `(x, y)` for a grid of `scale` cells per unit.
fn cell(x: f64, y: f64, scale: f64) -> (f64, f64) {
    ((x * scale).floor(), (y * scale).floor())
}

fn scale_schema() -> Value {
    json!({
        "type": "number",
        "default": DEFAULT_SCALE,
        "min": 0.0,
        "exclusive_min": true,
        "description": "Grid cells per unit; the raster spans one unit on each axis"
    })
}

fn seed_schema() -> Value {
    json!({
        "type": "number",
        "default": DEFAULT_SEED,
        "description": "Extra hash coordinate; any change gives an unrelated pattern"
    })
}

/// Grayscale value noise, one value per grid cell.
#[derive(Debug, Clone, Copy)]
pub struct WhiteNoise {
    pub scale: f64,
    pub seed: f64,
}

impl Default for WhiteNoise {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            seed: DEFAULT_SEED,
        }
    }
}

impl WhiteNoise {
    /// Reads `scale` and `seed` from a JSON object, falling back to defaults.
    ///
    /// Returns `HashtoneError::InvalidParam` if `scale` is not positive.
    pub fn from_json(params: &Value) -> Result<Self, HashtoneError> {
        Ok(Self {
            scale: param_positive_f64(params, "scale", DEFAULT_SCALE)?,
            seed: param_f64(params, "seed", DEFAULT_SEED),
        })
    }
}

impl Pattern for WhiteNoise {
    fn argb(&self, x: f64, y: f64) -> u32 {
        let (cx, cy) = cell(x, y, self.scale);
        let v = unit_hash3(cx, cy, self.seed);
        to_argb(v, v, v)
    }

    fn params(&self) -> Value {
        json!({"scale": self.scale, "seed": self.seed})
    }

    fn param_schema(&self) -> Value {
        json!({"scale": scale_schema(), "seed": seed_schema()})
    }
}

/// Random hue per grid cell.
#[derive(Debug, Clone, Copy)]
pub struct HueNoise {
    pub scale: f64,
    pub seed: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Default for HueNoise {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            seed: DEFAULT_SEED,
            saturation: DEFAULT_SATURATION,
            lightness: DEFAULT_LIGHTNESS,
        }
    }
}

impl HueNoise {
    /// Reads `scale`, `seed`, `saturation` and `lightness` from a JSON
    /// object. Saturation and lightness are clamped into [0, 1].
    pub fn from_json(params: &Value) -> Result<Self, HashtoneError> {
        Ok(Self {
            scale: param_positive_f64(params, "scale", DEFAULT_SCALE)?,
            seed: param_f64(params, "seed", DEFAULT_SEED),
            saturation: param_unit_f64(params, "saturation", DEFAULT_SATURATION),
            lightness: param_unit_f64(params, "lightness", DEFAULT_LIGHTNESS),
        })
    }
}

impl Pattern for HueNoise {
    fn argb(&self, x: f64, y: f64) -> u32 {
        let (cx, cy) = cell(x, y, self.scale);
        let hue = unit_hash3(cx, cy, self.seed);
        Hsl::new(hue, self.saturation, self.lightness)
            .to_rgb()
            .to_argb()
    }

    fn params(&self) -> Value {
        json!({
            "scale": self.scale,
            "seed": self.seed,
            "saturation": self.saturation,
            "lightness": self.lightness,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "scale": scale_schema(),
            "seed": seed_schema(),
            "saturation": {
                "type": "number",
                "default": DEFAULT_SATURATION,
                "min": 0.0,
                "max": 1.0,
                "description": "HSL saturation of every cell"
            },
            "lightness": {
                "type": "number",
                "default": DEFAULT_LIGHTNESS,
                "min": 0.0,
                "max": 1.0,
                "description": "HSL lightness of every cell"
            }
        })
    }
}

/// The unit square as color: red = x, green = y, blue = 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gradient;

impl Pattern for Gradient {
    fn argb(&self, x: f64, y: f64) -> u32 {
        to_argb(x, y, 0.0)
    }

    fn params(&self) -> Value {
        json!({})
    }

    fn param_schema(&self) -> Value {
        json!({})
    }
}

/// Hue sweeps along x, lightness along y.
#[derive(Debug, Clone, Copy)]
pub struct HslWheel {
    pub saturation: f64,
}

impl Default for HslWheel {
    fn default() -> Self {
        Self {
            saturation: DEFAULT_WHEEL_SATURATION,
        }
    }
}

impl HslWheel {
    /// Reads `saturation` from a JSON object, clamped into [0, 1].
    pub fn from_json(params: &Value) -> Self {
        Self {
            saturation: param_unit_f64(params, "saturation", DEFAULT_WHEEL_SATURATION),
        }
    }
}

impl Pattern for HslWheel {
    fn argb(&self, x: f64, y: f64) -> u32 {
        Hsl::new(x, self.saturation, y).to_rgb().to_argb()
    }

    fn params(&self) -> Value {
        json!({"saturation": self.saturation})
    }

    fn param_schema(&self) -> Value {
        json!({
            "saturation": {
                "type": "number",
                "default": DEFAULT_WHEEL_SATURATION,
                "min": 0.0,
                "max": 1.0,
                "description": "HSL saturation across the whole wheel"
            }
        })
    }
}
