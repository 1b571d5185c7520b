//! Per-pixel evaluation of a [`Pattern`] into a [`Raster`].
//!
//! Pixel `(px, py)` of a `width x height` raster samples the pattern at
//! `(px / width, py / height)`, so the image always spans the unit square
//! regardless of resolution.
//!
//! [`fill`] splits the buffer into rows and evaluates them on the rayon
//! thread pool. Patterns are pure, so no synchronization is needed and the
//! output is identical to [`fill_sequential`].

use std::time::Instant;

use hashtone_core::error::HashtoneError;
use hashtone_core::raster::Raster;
use log::debug;
use rayon::prelude::*;

use crate::pattern::Pattern;

/// Evaluates one row of pixels.
fn fill_row(pattern: &dyn Pattern, row: &mut [u32], py: usize, width: usize, height: usize) {
    let y = py as f64 / height as f64;
    for (px, out) in row.iter_mut().enumerate() {
        *out = pattern.argb(px as f64 / width as f64, y);
    }
}

/// Renders `pattern` into a new raster, one rayon task per row.
///
/// Returns `HashtoneError::InvalidDimensions` if either dimension is zero
/// or the raster would be too large.
pub fn fill(pattern: &dyn Pattern, width: usize, height: usize) -> Result<Raster, HashtoneError> {
    let mut raster = Raster::new(width, height)?;
    let start = Instant::now();
    raster
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(py, row)| fill_row(pattern, row, py, width, height));
    debug!(
        "filled {width}x{height} raster in {:.2?} on {} threads",
        start.elapsed(),
        rayon::current_num_threads()
    );
    Ok(raster)
}

/// Renders `pattern` on the calling thread only.
pub fn fill_sequential(
    pattern: &dyn Pattern,
    width: usize,
    height: usize,
) -> Result<Raster, HashtoneError> {
    let mut raster = Raster::new(width, height)?;
    raster
        .pixels_mut()
        .chunks_mut(width)
        .enumerate()
        .for_each(|(py, row)| fill_row(pattern, row, py, width, height));
    Ok(raster)
}
