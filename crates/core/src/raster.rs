//! Two-dimensional buffer of packed ARGB8888 pixels.
//!
//! A `Raster` stores `width * height` `u32` pixels in row-major layout, in
//! the byte order produced by [`crate::pack`]. Coordinate access uses
//! toroidal (wrap-around) addressing so negative and overflowing indices are
//! valid.

use crate::error::HashtoneError;

/// A 2D grid of ARGB8888 pixels with toroidal coordinate wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

/// Largest raster, in pixels, that may be allocated (1 GiB of ARGB).
pub const MAX_PIXELS: usize = 1 << 28;

/// Validates dimensions and returns the pixel count.
///
/// Each side must be non-zero and fit in `u32` (the PNG limit), and the
/// product must not exceed [`MAX_PIXELS`].
pub fn pixel_count(width: usize, height: usize) -> Result<usize, HashtoneError> {
    let invalid = HashtoneError::InvalidDimensions { width, height };
    if width == 0 || height == 0 {
        return Err(invalid);
    }
    if u32::try_from(width).is_err() || u32::try_from(height).is_err() {
        return Err(invalid);
    }
    match width.checked_mul(height) {
        Some(count) if count <= MAX_PIXELS => Ok(count),
        _ => Err(invalid),
    }
}

impl Raster {
    /// Creates a raster of transparent black (`0x00000000`) pixels.
    ///
    /// Returns `HashtoneError::InvalidDimensions` if [`pixel_count`] rejects
    /// the dimensions.
    pub fn new(width: usize, height: usize) -> Result<Self, HashtoneError> {
        Self::filled(width, height, 0)
    }

    /// Creates a raster with every pixel set to `argb`.
    pub fn filled(width: usize, height: usize, argb: u32) -> Result<Self, HashtoneError> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![argb; len],
        })
    }

    /// Creates a raster from a pre-built pixel vector, validating that
    /// `pixels.len() == width * height`.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<u32>,
    ) -> Result<Self, HashtoneError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(HashtoneError::PixelCountMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Raster width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the row-major pixels.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable access to the row-major pixels.
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Consumes the raster, returning its pixels.
    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    fn index(&self, x: isize, y: isize) -> usize {
        let xi = x.rem_euclid(self.width as isize) as usize;
        let yi = y.rem_euclid(self.height as isize) as usize;
        yi * self.width + xi
    }

    /// Gets the pixel at `(x, y)` with toroidal wrapping.
    pub fn get(&self, x: isize, y: isize) -> u32 {
        self.pixels[self.index(x, y)]
    }

    /// Sets the pixel at `(x, y)` with toroidal wrapping.
    pub fn set(&mut self, x: isize, y: isize, argb: u32) {
        let idx = self.index(x, y);
        self.pixels[idx] = argb;
    }

    /// Iterates over all pixels yielding `(x, y, argb)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.pixels.iter().enumerate().map(|(i, &p)| {
            let x = i % self.width;
            let y = i / self.width;
            (x, y, p)
        })
    }
}
