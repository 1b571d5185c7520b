//! Error types for hashtone.
//!
//! The numeric primitives never fail; these errors only come from the
//! consumer boundary (raster construction, pattern lookup, file output).

use thiserror::Error;

/// Errors produced by raster, pattern and snapshot operations.
#[derive(Debug, Error)]
pub enum HashtoneError {
    /// Width or height was zero or wider than `u32`, or the pixel count
    /// exceeded [`crate::raster::MAX_PIXELS`].
    #[error(
        "invalid dimensions {width}x{height}: each side must be 1 to {max_side} and the raster at most {max_pixels} pixels",
        max_side = u32::MAX,
        max_pixels = crate::raster::MAX_PIXELS
    )]
    InvalidDimensions { width: usize, height: usize },

    /// A runtime coordinate slice did not have 1 to 4 components.
    #[error("invalid coordinate arity {0}: expected 1 to 4 components")]
    InvalidArity(usize),

    /// A pixel buffer length did not match the requested dimensions.
    #[error("pixel buffer holds {actual} pixels but a {width}x{height} raster needs {expected}")]
    PixelCountMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// A pattern name was not found in the registry.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// A pattern parameter was present but outside its valid range.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// A recipe file was readable but not a valid recipe document.
    #[error("invalid recipe {path}: {reason}")]
    InvalidRecipe { path: String, reason: String },

    /// File output or input failed.
    #[error("i/o error: {0}")]
    Io(String),
}
