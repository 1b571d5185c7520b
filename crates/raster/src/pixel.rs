//! Pure-computation conversion from a packed ARGB [`Raster`] to RGBA8 bytes.
//!
//! This module is always available (no feature gate) so that any consumer
//! expecting `[r, g, b, a]` byte order can share the same conversion as the
//! `png` snapshot path.

use hashtone_core::pack::unpack_argb;
use hashtone_core::raster::Raster;

/// Unpacks every pixel into four bytes `(R, G, B, A)`.
///
/// The buffer length is `width * height * 4`.
pub fn raster_to_rgba(raster: &Raster) -> Vec<u8> {
    raster.pixels().iter().flat_map(|&p| unpack_argb(p)).collect()
}
