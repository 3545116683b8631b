//! Signed fixed-point numbers with a compile-time fractional bit count.
//!
//! A `Fixed<F>` holds a 32-bit two's complement word interpreted as
//! `raw / 2^F`. Conversions round to nearest and products are formed in a
//! 64-bit intermediate before shifting back down. Nothing is range checked:
//! add, subtract and multiply wrap like the underlying integer, so an
//! oscillator that outgrows the format corrupts its output instead of
//! panicking.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Fixed-point value with `FRAC` fractional bits (1..=30).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fixed<const FRAC: u32>(i32);

/// Q16.16, the default format of the fixed-point engines.
pub type Q16_16 = Fixed<16>;

/// Eight fractional bits. The integer part shares the 32-bit word, so only the
/// fractional resolution matches a packed 16-bit Q8.8.
pub type Q8_8 = Fixed<8>;

impl<const FRAC: u32> Fixed<FRAC> {
    /// Rejects formats whose `ONE` or half-unit bias does not fit the word.
    const VALID_FORMAT: () = assert!(FRAC >= 1 && FRAC <= 30, "fractional bits must be 1..=30");

    /// Number of fractional bits.
    pub const FRAC_BITS: u32 = FRAC;

    /// Zero constant.
    pub const ZERO: Self = Self(0);

    /// 1.0 in this format.
    pub const ONE: Self = Self(1 << FRAC);

    /// Half a unit, added before the final shift of `to_int`.
    const HALF_RAW: i32 = 1 << (FRAC - 1);

    /// Convert a real number, rounding half away from zero.
    ///
    /// Reals outside the representable range saturate at the word limits.
    #[inline]
    pub fn from_f64(val: f64) -> Self {
        let () = Self::VALID_FORMAT;
        let scaled = val * Self::ONE.0 as f64;
        let bias = if val >= 0.0 { 0.5 } else { -0.5 };
        Self((scaled + bias) as i32)
    }

    /// Wrap a raw word without conversion.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw word.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Round to the nearest integer, ties toward positive infinity.
    ///
    /// Computed as `(raw + half) >> FRAC` with an arithmetic shift; this bias
    /// trick is the reference rounding and must not be replaced by a library
    /// rounding call.
    #[inline]
    pub fn to_int(self) -> i32 {
        self.0.wrapping_add(Self::HALF_RAW) >> FRAC
    }

    /// Exact value as f64.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::ONE.0 as f64
    }
}

impl<const FRAC: u32> Add for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl<const FRAC: u32> Sub for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl<const FRAC: u32> Mul for Fixed<FRAC> {
    type Output = Self;

    /// Widen to i64, multiply, shift right by `FRAC`, truncate to 32 bits.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(((self.0 as i64 * rhs.0 as i64) >> FRAC) as i32)
    }
}

impl<const FRAC: u32> Neg for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl<const FRAC: u32> fmt::Display for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_has_expected_raw_value() {
        assert_eq!(Q16_16::ONE.raw(), 65536);
        assert_eq!(Q8_8::ONE.raw(), 256);
    }

    #[test]
    fn from_f64_rounds_half_away_from_zero() {
        // 1.5 and 2.5 raw units sit exactly on a tie
        assert_eq!(Q16_16::from_f64(1.5 / 65536.0).raw(), 2);
        assert_eq!(Q16_16::from_f64(2.5 / 65536.0).raw(), 3);
        assert_eq!(Q16_16::from_f64(-1.5 / 65536.0).raw(), -2);
        assert_eq!(Q16_16::from_f64(-2.5 / 65536.0).raw(), -3);
    }

    #[test]
    fn from_f64_saturates_out_of_range() {
        assert_eq!(Q16_16::from_f64(1e12).raw(), i32::MAX);
        assert_eq!(Q16_16::from_f64(-1e12).raw(), i32::MIN);
    }

    #[test]
    fn to_int_rounds_half_up() {
        assert_eq!(Q16_16::from_f64(0.5).to_int(), 1);
        assert_eq!(Q16_16::from_f64(-0.5).to_int(), 0);
        assert_eq!(Q16_16::from_f64(-1.5).to_int(), -1);
        assert_eq!(Q16_16::from_f64(2.49).to_int(), 2);
        assert_eq!(Q16_16::from_f64(-2.51).to_int(), -3);
    }

    #[test]
    fn mul_uses_wide_intermediate() {
        // 150 * 150 overflows a 32-bit raw product but not the result
        let a = Q16_16::from_f64(150.0);
        assert_eq!((a * a).to_f64(), 22500.0);

        let b = Q16_16::from_f64(1.5);
        let c = Q16_16::from_f64(2.25);
        assert_eq!((b * c).to_f64(), 3.375);
    }

    #[test]
    fn mul_truncates_toward_negative_infinity() {
        let tiny = Q16_16::from_raw(1);
        assert_eq!((Q16_16::from_raw(-1) * tiny).raw(), -1);
        assert_eq!((Q16_16::from_raw(1) * tiny).raw(), 0);
    }

    #[test]
    fn add_and_sub_wrap() {
        let max = Q16_16::from_raw(i32::MAX);
        let unit = Q16_16::from_raw(1);
        assert_eq!((max + unit).raw(), i32::MIN);
        assert_eq!((Q16_16::from_raw(i32::MIN) - unit).raw(), i32::MAX);
    }

    #[test]
    fn to_f64_is_exact() {
        assert_eq!(Q8_8::from_raw(-384).to_f64(), -1.5);
        assert_eq!(Q16_16::from_f64(-3.25).to_f64(), -3.25);
    }

    #[test]
    fn serializes_as_raw_word() {
        let value = Q16_16::from_f64(1.0);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "65536");
        let restored: Q16_16 = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, value);
    }
}
