//! Packing of real-valued channels into ARGB8888 integers.
//!
//! Channels are quantized by scaling by 256, truncating toward zero and
//! clamping to [0, 255]. Values at or above 1.0 saturate through the clamp.
//! This is a simple quantization, not a rounding or perceptual one.

/// Fully opaque alpha byte.
pub const OPAQUE: u8 = 255;

/// Clamps an integer to the byte range [0, 255].
#[inline]
pub fn clamp_to_byte(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Quantizes one real channel to a byte.
///
/// The float to int cast saturates at the `i32` bounds and maps NaN to 0,
/// so every input has a defined byte.
#[inline]
pub fn channel_to_byte(c: f64) -> u8 {
    clamp_to_byte((c * 256.0) as i32)
}

/// Packs four bytes as `(a << 24) | (r << 16) | (g << 8) | b`.
#[inline]
pub fn pack_bytes(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Splits a packed ARGB value into `[r, g, b, a]` bytes.
#[inline]
pub fn unpack_argb(argb: u32) -> [u8; 4] {
    let [a, r, g, b] = argb.to_be_bytes();
    [r, g, b, a]
}

/// Packs an opaque color.
#[inline]
pub fn to_argb(r: f64, g: f64, b: f64) -> u32 {
    pack_bytes(
        channel_to_byte(r),
        channel_to_byte(g),
        channel_to_byte(b),
        OPAQUE,
    )
}

/// Packs a color with alpha.
#[inline]
pub fn to_argba(r: f64, g: f64, b: f64, a: f64) -> u32 {
    pack_bytes(
        channel_to_byte(r),
        channel_to_byte(g),
        channel_to_byte(b),
        channel_to_byte(a),
    )
}
