//! Deterministic hashing of real-valued coordinates.
//!
//! Hashes 1 to 4 `f64` coordinates into a signed 64-bit value and maps that
//! value onto `[0, 1)`. Every function here is pure: the same coordinate bits
//! always produce the same hash on every run and every platform, so a
//! renderer can evaluate pixels in any order on any number of threads.
//!
//! Coordinates are hashed by their exact IEEE-754 bit pattern (`f64::to_bits`),
//! never by numeric value. `-0.0` and `0.0` hash differently, and NaN payload
//! bits feed into the hash unchanged.

use crate::error::HashtoneError;

/// Accumulator value the first coordinate is folded onto.
const SEED: i64 = 0x8000;

/// Rotation applied to each mixed coordinate before it is folded in.
/// Makes the hash depend on coordinate order.
const AXIS_ROTATION: u32 = 17;

/// Exactly `1 / 2^63`.
const UNIT_SCALE: f64 = 1.0 / 9_223_372_036_854_775_808.0;

/// Largest `f64` strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Highest arity accepted by [`hash_coords`].
pub const MAX_ARITY: usize = 4;

/// Xorshift avalanche mixer with shifts (21, 35, 4).
///
/// The right shift is logical; operating on `u64` guarantees no sign
/// extension for inputs with the top bit set.
#[inline]
pub fn mix(mut a: u64) -> u64 {
    a ^= a << 21;
    a ^= a >> 35;
    a ^= a << 4;
    a
}

/// Folds one more coordinate onto an accumulated hash.
///
/// `hash2(x, y) == fold(hash1(x), y)` and so on up the arities.
#[inline]
pub fn fold(acc: i64, v: f64) -> i64 {
    let axis = mix(v.to_bits()).rotate_left(AXIS_ROTATION);
    mix(mix((acc as u64).wrapping_add(axis))) as i64
}

/// Hashes a single coordinate.
#[inline]
pub fn hash1(x: f64) -> i64 {
    fold(SEED, x)
}

/// Hashes a 2D coordinate. Not symmetric in `x` and `y`.
#[inline]
pub fn hash2(x: f64, y: f64) -> i64 {
    fold(hash1(x), y)
}

/// Hashes a 3D coordinate.
#[inline]
pub fn hash3(x: f64, y: f64, z: f64) -> i64 {
    fold(hash2(x, y), z)
}

/// Hashes a 4D coordinate.
#[inline]
pub fn hash4(x: f64, y: f64, z: f64, t: f64) -> i64 {
    fold(hash3(x, y, z), t)
}

/// Maps a hash onto `[0, 1)` using its 63 non-sign bits.
///
/// The masked value is scaled by `1 / 2^63`. Values within 2^9 of
/// `i64::MAX` round up to `2^63` when converted to `f64`; those are capped
/// to the largest value below 1.0.
#[inline]
pub fn to_unit(h: i64) -> f64 {
    ((h & i64::MAX) as f64 * UNIT_SCALE).min(BELOW_ONE)
}

/// [`hash1`] mapped onto `[0, 1)`.
#[inline]
pub fn unit_hash1(x: f64) -> f64 {
    to_unit(hash1(x))
}

/// [`hash2`] mapped onto `[0, 1)`.
#[inline]
pub fn unit_hash2(x: f64, y: f64) -> f64 {
    to_unit(hash2(x, y))
}

/// [`hash3`] mapped onto `[0, 1)`.
#[inline]
pub fn unit_hash3(x: f64, y: f64, z: f64) -> f64 {
    to_unit(hash3(x, y, z))
}

/// [`hash4`] mapped onto `[0, 1)`.
#[inline]
pub fn unit_hash4(x: f64, y: f64, z: f64, t: f64) -> f64 {
    to_unit(hash4(x, y, z, t))
}

/// A coordinate of fixed arity 1 to 4.
///
/// Implemented for `f64`, tuples and arrays so that [`hash`] and
/// [`unit_hash`] can be called with any supported arity.
pub trait Coordinate: Copy {
    /// Hash of this coordinate.
    fn hash_value(self) -> i64;

    /// Hash of this coordinate mapped onto `[0, 1)`.
    fn unit_value(self) -> f64 {
        to_unit(self.hash_value())
    }
}

impl Coordinate for f64 {
    fn hash_value(self) -> i64 {
        hash1(self)
    }
}

impl Coordinate for (f64, f64) {
    fn hash_value(self) -> i64 {
        hash2(self.0, self.1)
    }
}

impl Coordinate for (f64, f64, f64) {
    fn hash_value(self) -> i64 {
        hash3(self.0, self.1, self.2)
    }
}

impl Coordinate for (f64, f64, f64, f64) {
    fn hash_value(self) -> i64 {
        hash4(self.0, self.1, self.2, self.3)
    }
}

impl Coordinate for [f64; 1] {
    fn hash_value(self) -> i64 {
        hash1(self[0])
    }
}

impl Coordinate for [f64; 2] {
    fn hash_value(self) -> i64 {
        hash2(self[0], self[1])
    }
}

impl Coordinate for [f64; 3] {
    fn hash_value(self) -> i64 {
        hash3(self[0], self[1], self[2])
    }
}

impl Coordinate for [f64; 4] {
    fn hash_value(self) -> i64 {
        hash4(self[0], self[1], self[2], self[3])
    }
}

/// Hashes a coordinate of any supported arity.
#[inline]
pub fn hash<C: Coordinate>(c: C) -> i64 {
    c.hash_value()
}

/// Hashes a coordinate of any supported arity onto `[0, 1)`.
#[inline]
pub fn unit_hash<C: Coordinate>(c: C) -> f64 {
    c.unit_value()
}

/// Hashes a coordinate whose arity is only known at runtime.
///
/// Returns `HashtoneError::InvalidArity` unless `coords` has 1 to
/// [`MAX_ARITY`] components.
pub fn hash_coords(coords: &[f64]) -> Result<i64, HashtoneError> {
    match coords.len() {
        1..=MAX_ARITY => Ok(coords.iter().fold(SEED, |acc, &v| fold(acc, v))),
        n => Err(HashtoneError::InvalidArity(n)),
    }
}

/// [`hash_coords`] mapped onto `[0, 1)`.
pub fn unit_hash_coords(coords: &[f64]) -> Result<f64, HashtoneError> {
    hash_coords(coords).map(to_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Golden values --
    //
    // If any of these break, every image generated from these hashes changes.

    #[test]
    fn mix_known_values() {
        assert_eq!(mix(0), 0);
        assert_eq!(mix(1), 35_651_601);
    }

    #[test]
    fn mix_right_shift_is_logical() {
        // An arithmetic shift would smear the top bit across bits 28..63.
        assert_eq!(mix(1 << 63), 0x8000_0001_1000_0000);
    }

    #[test]
    fn hash1_known_values() {
        assert_eq!(hash1(0.0), 144_115_188_084_277_762);
        assert_eq!(hash1(1.0), 1_110_508_942_319_999_703);
        assert_eq!(hash1(-0.0), 297_845_092_113_286_934);
    }

    #[test]
    fn hash1_is_not_plain_mix_of_bits() {
        assert_ne!(hash1(1.0), mix(1.0_f64.to_bits()) as i64);
    }

    #[test]
    fn hash2_known_values() {
        assert_eq!(hash2(0.5, 0.25), -6_845_647_311_755_136_644);
        assert_eq!(hash2(0.25, 0.5), -538_550_256_618_648_903);
    }

    #[test]
    fn hash3_and_hash4_known_values() {
        assert_eq!(hash3(1.0, 2.0, 3.0), -2_798_121_323_062_743_624);
        assert_eq!(hash4(1.0, 2.0, 3.0, 4.0), -3_284_991_815_951_227_750);
    }

    #[test]
    fn unit_hash_known_values() {
        assert_eq!(unit_hash1(0.0), 0.015625000000913103);
        assert_eq!(unit_hash1(1.0), 0.12040162078279235);
        assert_eq!(unit_hash2(0.5, 0.25), 0.2577934312525528);
        assert_eq!(unit_hash3(1.0, 2.0, 3.0), 0.6966270782657359);
        assert_eq!(unit_hash4(1.0, 2.0, 3.0, 4.0), 0.6438404736548576);
    }

    // -- Raw bit patterns --

    #[test]
    fn signed_zeros_hash_differently() {
        assert_ne!(hash1(0.0), hash1(-0.0));
        assert_ne!(hash2(1.0, 0.0), hash2(1.0, -0.0));
    }

    #[test]
    fn nan_payload_bits_feed_into_hash() {
        let nan_a = f64::from_bits(0x7ff8_0000_0000_0001);
        let nan_b = f64::from_bits(0x7ff8_0000_0000_0002);
        assert!(nan_a.is_nan() && nan_b.is_nan());
        assert_ne!(hash1(nan_a), hash1(nan_b));
        // Same payload, same hash.
        assert_eq!(hash1(nan_a), hash1(f64::from_bits(0x7ff8_0000_0000_0001)));
    }

    #[test]
    fn infinities_hash_deterministically() {
        assert_eq!(hash1(f64::INFINITY), hash1(f64::INFINITY));
        assert_ne!(hash1(f64::INFINITY), hash1(f64::NEG_INFINITY));
    }

    // -- Structure --

    #[test]
    fn hash_is_not_commutative() {
        assert_ne!(hash2(0.5, 0.25), hash2(0.25, 0.5));
        assert_ne!(hash3(1.0, 2.0, 3.0), hash3(3.0, 2.0, 1.0));
    }

    #[test]
    fn higher_arities_fold_onto_lower_arities() {
        let (x, y, z, t) = (0.1, -2.5, 1e9, f64::MIN_POSITIVE);
        assert_eq!(hash1(x), fold(SEED, x));
        assert_eq!(hash2(x, y), fold(hash1(x), y));
        assert_eq!(hash3(x, y, z), fold(hash2(x, y), z));
        assert_eq!(hash4(x, y, z, t), fold(hash3(x, y, z), t));
    }

    #[test]
    fn coordinate_forms_agree() {
        assert_eq!(hash(0.5), hash1(0.5));
        assert_eq!(hash([0.5]), hash1(0.5));
        assert_eq!(hash((0.5, 0.25)), hash2(0.5, 0.25));
        assert_eq!(hash([0.5, 0.25]), hash2(0.5, 0.25));
        assert_eq!(hash((1.0, 2.0, 3.0)), hash3(1.0, 2.0, 3.0));
        assert_eq!(hash([1.0, 2.0, 3.0]), hash3(1.0, 2.0, 3.0));
        assert_eq!(hash((1.0, 2.0, 3.0, 4.0)), hash4(1.0, 2.0, 3.0, 4.0));
        assert_eq!(hash([1.0, 2.0, 3.0, 4.0]), hash4(1.0, 2.0, 3.0, 4.0));
        assert_eq!(unit_hash((0.5, 0.25)), unit_hash2(0.5, 0.25));
    }

    // -- Runtime arity --

    #[test]
    fn hash_coords_matches_fixed_arities() {
        assert_eq!(hash_coords(&[1.0]).unwrap(), hash1(1.0));
        assert_eq!(hash_coords(&[1.0, 2.0]).unwrap(), hash2(1.0, 2.0));
        assert_eq!(hash_coords(&[1.0, 2.0, 3.0]).unwrap(), hash3(1.0, 2.0, 3.0));
        assert_eq!(
            hash_coords(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
            hash4(1.0, 2.0, 3.0, 4.0)
        );
        assert_eq!(
            unit_hash_coords(&[1.0, 2.0]).unwrap(),
            unit_hash2(1.0, 2.0)
        );
    }

    #[test]
    fn hash_coords_rejects_empty_and_too_long() {
        assert!(matches!(
            hash_coords(&[]),
            Err(HashtoneError::InvalidArity(0))
        ));
        assert!(matches!(
            hash_coords(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            Err(HashtoneError::InvalidArity(5))
        ));
    }

    // -- Unit interval --

    #[test]
    fn to_unit_extremes_stay_in_range() {
        assert_eq!(to_unit(0), 0.0);
        assert_eq!(to_unit(i64::MIN), 0.0);
        assert!(to_unit(i64::MAX) < 1.0);
        assert!(to_unit(-1) < 1.0);
        assert_eq!(to_unit(i64::MAX), BELOW_ONE);
    }

    #[test]
    fn to_unit_ignores_sign_bit() {
        assert_eq!(to_unit(12_345), to_unit(12_345 | i64::MIN));
    }

    #[test]
    fn unit_scale_is_exact() {
        assert_eq!(UNIT_SCALE, 2.0_f64.powi(-63));
        assert_eq!(to_unit(1 << 62), 0.5);
    }

    #[test]
    fn unit_hash2_is_roughly_uniform_on_integer_grid() {
        let mut buckets = [0u32; 10];
        for i in 0..100 {
            for j in 0..100 {
                let v = unit_hash2(i as f64, j as f64);
                buckets[(v * 10.0) as usize] += 1;
            }
        }
        for (i, &count) in buckets.iter().enumerate() {
            assert!(count >= 500, "bucket {i} has only {count} values");
        }
    }

    #[test]
    fn unit_hash2_is_roughly_uniform_on_fractional_grid() {
        let mut buckets = [0u32; 10];
        for i in 0..100 {
            for j in 0..100 {
                let v = unit_hash2(i as f64 / 100.0, j as f64 / 100.0);
                buckets[(v * 10.0) as usize] += 1;
            }
        }
        for (i, &count) in buckets.iter().enumerate() {
            assert!(count >= 500, "bucket {i} has only {count} values");
        }
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unit_hash_always_in_unit_interval(
                x: f64, y: f64, z: f64, t: f64,
            ) {
                for v in [
                    unit_hash1(x),
                    unit_hash2(x, y),
                    unit_hash3(x, y, z),
                    unit_hash4(x, y, z, t),
                ] {
                    prop_assert!((0.0..1.0).contains(&v), "{v} out of [0, 1)");
                }
            }

            #[test]
            fn to_unit_always_in_unit_interval(h: i64) {
                let v = to_unit(h);
                prop_assert!((0.0..1.0).contains(&v), "to_unit({h}) = {v}");
            }

            #[test]
            fn hash_is_deterministic_for_identical_bits(
                x: f64, y: f64, z: f64, t: f64,
            ) {
                let copy = |v: f64| f64::from_bits(v.to_bits());
                prop_assert_eq!(
                    hash4(x, y, z, t),
                    hash4(copy(x), copy(y), copy(z), copy(t))
                );
            }

            #[test]
            fn changing_last_axis_keeps_prefix_fold(
                x: f64, y: f64, z1: f64, z2: f64,
            ) {
                let prefix = hash2(x, y);
                prop_assert_eq!(hash3(x, y, z1), fold(prefix, z1));
                prop_assert_eq!(hash3(x, y, z2), fold(prefix, z2));
            }

            #[test]
            fn distinct_bits_give_distinct_hash1(a: u64, b: u64) {
                // Every step of `fold` is a bijection in the folded value.
                prop_assume!(a != b);
                prop_assert_ne!(hash1(f64::from_bits(a)), hash1(f64::from_bits(b)));
            }
        }
    }
}
