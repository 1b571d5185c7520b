//! HSL and RGB color types and the HSL to RGB conversion.
//!
//! All components are `f64` in [0, 1]. Hue is a fraction of a full turn and
//! wraps modulo 1.0. The conversion is the plain linear HSL ramp: no gamma
//! curve is applied, so the output is suitable for direct packing with
//! [`crate::pack`].

use serde::{Deserialize, Serialize};

use crate::pack;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Hue, saturation and lightness, each nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// RGB color. Components are not clamped until packed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// RGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Converts to RGB. Equivalent to calling the three per-channel functions.
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Adds an alpha channel.
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Packs into opaque ARGB8888.
    pub fn to_argb(self) -> u32 {
        pack::to_argb(self.r, self.g, self.b)
    }

    /// Formats as `"#rrggbb"` using the same quantization as [`Rgb::to_argb`].
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = pack::unpack_argb(self.to_argb());
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Rgba {
    /// Packs into ARGB8888.
    pub fn to_argb(self) -> u32 {
        pack::to_argba(self.r, self.g, self.b, self.a)
    }
}

/// The shared HSL ramp for one channel. `h` is the channel's offset hue.
fn component_from_pqh(p: f64, q: f64, h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    if h < ONE_SIXTH {
        p + (q - p) * 6.0 * h
    } else if h < 0.5 {
        q
    } else if h < TWO_THIRDS {
        p + (q - p) * (TWO_THIRDS - h) * 6.0
    } else {
        p
    }
}

/// Computes the `(p, q)` ramp bounds for a chromatic color.
fn ramp_bounds(s: f64, l: f64) -> (f64, f64) {
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    (2.0 * l - q, q)
}

/// Red channel of an HSL color.
pub fn red_from_hsl(h: f64, s: f64, l: f64) -> f64 {
    if s == 0.0 {
        return l;
    }
    let (p, q) = ramp_bounds(s, l);
    component_from_pqh(p, q, h + ONE_THIRD)
}

/// Green channel of an HSL color.
pub fn green_from_hsl(h: f64, s: f64, l: f64) -> f64 {
    if s == 0.0 {
        return l;
    }
    let (p, q) = ramp_bounds(s, l);
    component_from_pqh(p, q, h)
}

/// Blue channel of an HSL color.
pub fn blue_from_hsl(h: f64, s: f64, l: f64) -> f64 {
    if s == 0.0 {
        return l;
    }
    let (p, q) = ramp_bounds(s, l);
    component_from_pqh(p, q, h - ONE_THIRD)
}

/// Converts a whole HSL color to RGB.
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    Rgb {
        r: red_from_hsl(c.h, c.s, c.l),
        g: green_from_hsl(c.h, c.s, c.l),
        b: blue_from_hsl(c.h, c.s, c.l),
    }
}
