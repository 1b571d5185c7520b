#![deny(unsafe_code)]
//! Core primitives for the hashtone pixel generator.
//!
//! Provides deterministic coordinate hashing (`hash`, `unit_hash` and the
//! fixed-arity variants), HSL to RGB conversion, ARGB8888 channel packing,
//! the `Raster` pixel buffer, and the `Recipe`/params configuration helpers.
//!
//! The numeric functions are pure and total, so they can be called from any
//! number of threads per pixel without coordination.

pub mod color;
pub mod error;
pub mod hash;
pub mod pack;
pub mod params;
pub mod raster;
pub mod recipe;

pub use color::{blue_from_hsl, green_from_hsl, hsl_to_rgb, red_from_hsl, Hsl, Rgb, Rgba};
pub use error::HashtoneError;
pub use hash::{
    hash, hash1, hash2, hash3, hash4, hash_coords, unit_hash, unit_hash1, unit_hash2,
    unit_hash3, unit_hash4, unit_hash_coords, Coordinate,
};
pub use pack::{to_argb, to_argba};
pub use raster::Raster;
pub use recipe::Recipe;
