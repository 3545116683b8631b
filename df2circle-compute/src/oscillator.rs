//! Oscillators that trace a circle one angular step at a time.
//!
//! Both realizations are generic over [`OscillatorScalar`], so the same code
//! runs in f64 and in any fixed-point format. The update step has no
//! data-dependent branches; callers decide when to stop.

use crate::RecurrenceCoefficients;
use df2circle_core::{BoundaryPoint, OscillatorScalar};

/// A rotating phasor sampled once per step.
pub trait Oscillator {
    /// Current sample rounded to pixel coordinates.
    fn sample(&self) -> BoundaryPoint;

    /// Current in-phase and quadrature components before rounding.
    fn phasor(&self) -> (f64, f64);

    /// Advance by one angular step.
    fn advance(&mut self);
}

/// Which realization of the circle recurrence to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecurrenceForm {
    /// Second-order recurrence, one multiply per update.
    Df2,
    /// 2×2 rotation, four multiplies per update.
    Coupled,
}

/// Direct Form 2 resonator: `w[n] = 2cos(ω)·w[n-1] − w[n-2]`.
///
/// `w` is the in-phase (cosine) track. The quadrature track is rebuilt from
/// the last two outputs as `(w[n-1] − w[n-2]) · (−1/ω)`.
#[derive(Clone, Copy, Debug)]
pub struct Df2Oscillator<S> {
    /// w[n-1]
    prev: S,
    /// w[n-2]
    prev_prev: S,
    coeff: S,
    scale: S,
}

impl<S: OscillatorScalar> Df2Oscillator<S> {
    /// Start at angle zero: `w[n-1] = r`, `w[n-2] = r·cos(ω)`.
    pub fn new(coefficients: &RecurrenceCoefficients) -> Self {
        Self {
            prev: S::from_f64(coefficients.radius),
            prev_prev: S::from_f64(coefficients.radius * coefficients.cos_omega),
            coeff: S::from_f64(coefficients.coeff),
            scale: S::from_f64(coefficients.scale),
        }
    }

    /// Raw recurrence state `(w[n-1], w[n-2])`.
    pub fn state(&self) -> (S, S) {
        (self.prev, self.prev_prev)
    }

    #[inline]
    fn quadrature(&self) -> S {
        self.prev.sub(self.prev_prev).mul(self.scale)
    }
}

impl<S: OscillatorScalar> Oscillator for Df2Oscillator<S> {
    #[inline]
    fn sample(&self) -> BoundaryPoint {
        BoundaryPoint::new(self.prev.round_to_int(), self.quadrature().round_to_int())
    }

    fn phasor(&self) -> (f64, f64) {
        (self.prev.to_f64(), self.quadrature().to_f64())
    }

    #[inline]
    fn advance(&mut self) {
        let next = self.coeff.mul(self.prev).sub(self.prev_prev);
        self.prev_prev = self.prev;
        self.prev = next;
    }
}

/// Coupled-form oscillator: rotates `(x, y)` by ω each step.
#[derive(Clone, Copy, Debug)]
pub struct CoupledOscillator<S> {
    x: S,
    y: S,
    cos: S,
    sin: S,
}

impl<S: OscillatorScalar> CoupledOscillator<S> {
    /// Start at `(r, 0)`.
    pub fn new(coefficients: &RecurrenceCoefficients) -> Self {
        Self {
            x: S::from_f64(coefficients.radius),
            y: S::ZERO,
            cos: S::from_f64(coefficients.cos_omega),
            sin: S::from_f64(coefficients.sin_omega),
        }
    }
}

impl<S: OscillatorScalar> Oscillator for CoupledOscillator<S> {
    #[inline]
    fn sample(&self) -> BoundaryPoint {
        BoundaryPoint::new(self.x.round_to_int(), self.y.round_to_int())
    }

    fn phasor(&self) -> (f64, f64) {
        (self.x.to_f64(), self.y.to_f64())
    }

    #[inline]
    fn advance(&mut self) {
        let x = self.x.mul(self.cos).sub(self.y.mul(self.sin));
        let y = self.x.mul(self.sin).add(self.y.mul(self.cos));
        self.x = x;
        self.y = y;
    }
}
