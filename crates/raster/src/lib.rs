#![deny(unsafe_code)]
//! Pattern registry, parallel raster fill and PNG snapshots.
//!
//! This crate sits between `hashtone-core` (which defines the hashing, color
//! and packing primitives) and the CLI. It maps pattern names to
//! implementations and turns a pattern into pixels.

pub mod fill;
pub mod pattern;
pub mod patterns;
pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use hashtone_core::error::HashtoneError;
use serde_json::Value;

pub use fill::{fill, fill_sequential};
pub use pattern::Pattern;

/// All available pattern names.
const PATTERN_NAMES: &[&str] = &["white-noise", "hue-noise", "gradient", "hsl-wheel"];

/// Enumeration of all built-in patterns.
///
/// Wraps each pattern and delegates `Pattern` trait methods.
/// Use [`PatternKind::from_name`] for string-based construction.
pub enum PatternKind {
    WhiteNoise(patterns::WhiteNoise),
    HueNoise(patterns::HueNoise),
    Gradient(patterns::Gradient),
    HslWheel(patterns::HslWheel),
}

impl PatternKind {
    /// Constructs a pattern by name from a JSON params object.
    ///
    /// Returns `HashtoneError::UnknownPattern` if the name is not recognized,
    /// or `HashtoneError::InvalidParam` if a parameter is out of range.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, HashtoneError> {
        match name {
            "white-noise" => Ok(PatternKind::WhiteNoise(patterns::WhiteNoise::from_json(
                params,
            )?)),
            "hue-noise" => Ok(PatternKind::HueNoise(patterns::HueNoise::from_json(
                params,
            )?)),
            "gradient" => Ok(PatternKind::Gradient(patterns::Gradient)),
            "hsl-wheel" => Ok(PatternKind::HslWheel(patterns::HslWheel::from_json(params))),
            _ => Err(HashtoneError::UnknownPattern(name.to_string())),
        }
    }

    /// Returns a slice of all recognized pattern names.
    pub fn list_patterns() -> &'static [&'static str] {
        PATTERN_NAMES
    }
}

impl Pattern for PatternKind {
    fn argb(&self, x: f64, y: f64) -> u32 {
        match self {
            PatternKind::WhiteNoise(p) => p.argb(x, y),
            PatternKind::HueNoise(p) => p.argb(x, y),
            PatternKind::Gradient(p) => p.argb(x, y),
            PatternKind::HslWheel(p) => p.argb(x, y),
        }
    }

    fn params(&self) -> Value {
        match self {
            PatternKind::WhiteNoise(p) => p.params(),
            PatternKind::HueNoise(p) => p.params(),
            PatternKind::Gradient(p) => p.params(),
            PatternKind::HslWheel(p) => p.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            PatternKind::WhiteNoise(p) => p.param_schema(),
            PatternKind::HueNoise(p) => p.param_schema(),
            PatternKind::Gradient(p) => p.param_schema(),
            PatternKind::HslWheel(p) => p.param_schema(),
        }
    }
}
