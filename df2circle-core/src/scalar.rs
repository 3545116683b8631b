//! Scalar abstraction for oscillator arithmetic.
//!
//! Lets one generic recurrence run in f64 or in any fixed-point format
//! with zero runtime overhead.

use crate::Fixed;

/// Number type an oscillator can iterate in.
pub trait OscillatorScalar: Copy + std::fmt::Debug {
    /// Additive identity.
    const ZERO: Self;

    /// Fractional bits of precision. For f64 this is the mantissa width.
    const FRACTIONAL_BITS: u32;

    /// Convert from f64, rounding to nearest.
    fn from_f64(val: f64) -> Self;

    /// Exact or nearest f64 value, for analysis and reporting.
    fn to_f64(self) -> f64;

    /// Round to the nearest pixel coordinate.
    fn round_to_int(self) -> i32;

    fn add(self, rhs: Self) -> Self;

    fn sub(self, rhs: Self) -> Self;

    fn mul(self, rhs: Self) -> Self;
}

impl OscillatorScalar for f64 {
    const ZERO: Self = 0.0;
    const FRACTIONAL_BITS: u32 = f64::MANTISSA_DIGITS - 1;

    #[inline]
    fn from_f64(val: f64) -> Self {
        val
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    /// Ties round away from zero, then the cast saturates.
    #[inline]
    fn round_to_int(self) -> i32 {
        self.round() as i32
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }
}

impl<const FRAC: u32> OscillatorScalar for Fixed<FRAC> {
    const ZERO: Self = Fixed::ZERO;
    const FRACTIONAL_BITS: u32 = FRAC;

    #[inline]
    fn from_f64(val: f64) -> Self {
        Fixed::from_f64(val)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        Fixed::to_f64(self)
    }

    #[inline]
    fn round_to_int(self) -> i32 {
        self.to_int()
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }
}
