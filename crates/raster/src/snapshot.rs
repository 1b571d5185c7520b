//! PNG output of a [`Raster`].
//!
//! This module is feature-gated behind `png` (default on) so that consumers
//! that only need pixel buffers can depend on this crate without pulling in
//! the `image` crate. The byte conversion itself lives in [`crate::pixel`].

use std::path::Path;

use hashtone_core::error::HashtoneError;
use hashtone_core::raster::Raster;
use log::debug;

use crate::pixel::raster_to_rgba;

/// Writes a raster as an RGBA PNG image.
///
/// Returns `HashtoneError::InvalidDimensions` if a side does not fit in
/// `u32` (unreachable for rasters built through [`Raster::new`]), or
/// `HashtoneError::Io` on write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), HashtoneError> {
    let rgba = raster_to_rgba(raster);
    let invalid = || HashtoneError::InvalidDimensions {
        width: raster.width(),
        height: raster.height(),
    };
    let w = u32::try_from(raster.width()).map_err(|_| invalid())?;
    let h = u32::try_from(raster.height()).map_err(|_| invalid())?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| HashtoneError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| HashtoneError::Io(e.to_string()))?;
    debug!("wrote {w}x{h} png to {}", path.display());
    Ok(())
}
