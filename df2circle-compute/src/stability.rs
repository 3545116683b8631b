//! Amplitude drift of the DF2 recurrence over many revolutions.
//!
//! A healthy oscillator keeps its amplitude and keeps turning. Drift is the
//! ratio of the largest to the smallest amplitude seen over a run; a run
//! whose phasor stops turning has infinite drift however steady its
//! amplitude. Read-only with respect to the sweep engine: nothing here plots.

use crate::oscillator::{Df2Oscillator, Oscillator};
use crate::termination::revolution_steps;
use crate::RecurrenceCoefficients;
use df2circle_core::OscillatorScalar;

/// Running max/min of an amplitude series.
#[derive(Clone, Copy, Debug)]
struct DriftTracker {
    max: f64,
    min: f64,
}

impl DriftTracker {
    fn new() -> Self {
        Self {
            max: 0.0,
            min: f64::INFINITY,
        }
    }

    #[inline]
    fn observe(&mut self, amplitude: f64) {
        self.max = self.max.max(amplitude);
        self.min = self.min.min(amplitude);
    }

    /// `max / min`; 1.0 for an empty series, infinite once the amplitude hit zero.
    fn ratio(&self) -> f64 {
        if self.min == f64::INFINITY {
            1.0
        } else if self.min == 0.0 {
            f64::INFINITY
        } else {
            self.max / self.min
        }
    }
}

/// A run that turns through less than this share of the expected angle has
/// stalled.
const MIN_ROTATION_FRACTION: f64 = 0.5;

/// Angle swept by a phasor, accumulated one step at a time.
#[derive(Clone, Copy, Debug, Default)]
struct RotationTracker {
    last: Option<(f64, f64)>,
    turned: f64,
}

impl RotationTracker {
    #[inline]
    fn observe(&mut self, x: f64, y: f64) {
        if let Some((px, py)) = self.last {
            // Signed angle between consecutive phasors, in (−π, π]
            self.turned += libm::atan2(px * y - py * x, px * x + py * y);
        }
        self.last = Some((x, y));
    }

    fn stalled(&self, expected: f64) -> bool {
        self.turned.abs() < expected * MIN_ROTATION_FRACTION
    }
}

/// Drift of the real-arithmetic DF2 oscillator over `revolutions` turns.
///
/// Amplitude is taken from the sample pair the engine plots: the in-phase
/// output `w[n-1]` and the rebuilt quadrature `(w[n-1] − w[n-2])·(−1/ω)`.
/// Stays close to `1 + ω/2` for any practical radius.
pub fn stability_drift(radius: i32, revolutions: u32) -> f64 {
    stability_drift_with::<f64>(radius, revolutions)
}

/// [`stability_drift`] in any scalar format.
///
/// Reports infinity when the amplitude collapses to zero or when the phasor
/// stops turning. Past its critical radius a fixed-point format rounds
/// `2cos ω` to 2.0 and the recurrence degenerates into a ramp that never
/// rotates, so fixed-point runs there report infinity too.
pub fn stability_drift_with<S: OscillatorScalar>(radius: i32, revolutions: u32) -> f64 {
    let Some(coefficients) = RecurrenceCoefficients::for_radius(radius) else {
        return 1.0;
    };
    let steps = revolution_steps(coefficients.omega, revolutions);
    let mut oscillator = Df2Oscillator::<S>::new(&coefficients);
    let mut tracker = DriftTracker::new();
    let mut rotation = RotationTracker::default();

    for _ in 0..steps {
        let (in_phase, quadrature) = oscillator.phasor();
        tracker.observe(libm::hypot(in_phase, quadrature));
        rotation.observe(in_phase, quadrature);
        oscillator.advance();
    }

    // Rotation is measured between samples: one fewer interval than steps
    let expected = steps.saturating_sub(1) as f64 * coefficients.omega;
    if rotation.stalled(expected) {
        log::debug!(
            "Oscillator at radius {} turned {:.4} rad of an expected {:.4}",
            radius,
            rotation.turned,
            expected
        );
        return f64::INFINITY;
    }
    tracker.ratio()
}

/// Drift of the raw DF2 state norm `sqrt(w[n-1]² + w[n-2]²)`.
///
/// This is the figure of the published stability table. The two state
/// values are cosines half a turn of ω apart rather than a quadrature pair,
/// so the ratio is dominated by phase (about `2/ω`) and says little about
/// numerical health.
pub fn state_norm_drift(radius: i32, revolutions: u32) -> f64 {
    let Some(coefficients) = RecurrenceCoefficients::for_radius(radius) else {
        return 1.0;
    };
    let steps = revolution_steps(coefficients.omega, revolutions);
    let mut oscillator = Df2Oscillator::<f64>::new(&coefficients);
    let mut tracker = DriftTracker::new();

    for _ in 0..steps {
        let (prev, prev_prev) = oscillator.state();
        tracker.observe(libm::hypot(prev, prev_prev));
        oscillator.advance();
    }
    tracker.ratio()
}
