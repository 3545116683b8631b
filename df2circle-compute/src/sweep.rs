//! Sweep dispatch: one entry point for every circle generator.

use crate::baseline;
use crate::oscillator::{CoupledOscillator, Df2Oscillator, Oscillator, RecurrenceForm};
use crate::termination::{StepPolicy, SweepMode};
use crate::{AlgorithmVariant, RecurrenceCoefficients};
use df2circle_core::{
    critical_radius, plot_octant, BoundaryPoint, OscillatorScalar, PixelSurface, Q16_16,
};
use serde::{Deserialize, Serialize};

/// What one sweep did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepStats {
    /// Samples generated and plotted.
    pub samples: usize,
    /// Points handed to the surface, duplicates and clipped points included.
    pub points_emitted: usize,
    /// Pixels newly set on the surface.
    pub pixels_set: usize,
    /// False when an octant sweep ran out of steps before reaching the diagonal.
    pub completed: bool,
}

impl SweepStats {
    /// Result of a sweep that had nothing to draw.
    pub fn empty() -> Self {
        Self {
            completed: true,
            ..Self::default()
        }
    }
}

/// Draw a circle of `radius` around `center` with eight-way symmetry.
///
/// Returns the number of pixels newly set. `radius <= 0` draws nothing.
pub fn sweep<P: PixelSurface + ?Sized>(
    variant: AlgorithmVariant,
    surface: &mut P,
    center: BoundaryPoint,
    radius: i32,
) -> usize {
    sweep_with_mode(variant, SweepMode::Octant, surface, center, radius).pixels_set
}

/// Draw a circle with an explicit sweep mode.
pub fn sweep_with_mode<P: PixelSurface + ?Sized>(
    variant: AlgorithmVariant,
    mode: SweepMode,
    surface: &mut P,
    center: BoundaryPoint,
    radius: i32,
) -> SweepStats {
    match variant {
        AlgorithmVariant::Df2Real => {
            sweep_recurrence::<f64, P>(RecurrenceForm::Df2, mode, surface, center, radius)
        }
        AlgorithmVariant::Df2Fixed => {
            sweep_recurrence::<Q16_16, P>(RecurrenceForm::Df2, mode, surface, center, radius)
        }
        AlgorithmVariant::CoupledReal => {
            sweep_recurrence::<f64, P>(RecurrenceForm::Coupled, mode, surface, center, radius)
        }
        AlgorithmVariant::CoupledFixed => {
            sweep_recurrence::<Q16_16, P>(RecurrenceForm::Coupled, mode, surface, center, radius)
        }
        AlgorithmVariant::Bresenham => baseline::midpoint_circle(mode, surface, center, radius),
    }
}

/// Run a recurrence in any scalar format, e.g. `Fixed<8>` for a Q8.8 sweep.
pub fn sweep_recurrence<S: OscillatorScalar, P: PixelSurface + ?Sized>(
    form: RecurrenceForm,
    mode: SweepMode,
    surface: &mut P,
    center: BoundaryPoint,
    radius: i32,
) -> SweepStats {
    let Some(coefficients) = RecurrenceCoefficients::for_radius(radius) else {
        return SweepStats::empty();
    };

    if coefficients.radius > critical_radius(S::FRACTIONAL_BITS) {
        log::debug!(
            "Radius {} exceeds critical radius {:.0} for {} fractional bits",
            radius,
            critical_radius(S::FRACTIONAL_BITS),
            S::FRACTIONAL_BITS
        );
    }

    let policy = StepPolicy::new(mode, coefficients.omega);
    match form {
        RecurrenceForm::Df2 => {
            let mut oscillator = Df2Oscillator::<S>::new(&coefficients);
            run_oscillator(&mut oscillator, &policy, surface, center)
        }
        RecurrenceForm::Coupled => {
            let mut oscillator = CoupledOscillator::<S>::new(&coefficients);
            run_oscillator(&mut oscillator, &policy, surface, center)
        }
    }
}

/// Drive an oscillator until the policy stops it, plotting each sample.
pub fn run_oscillator<O: Oscillator, P: PixelSurface + ?Sized>(
    oscillator: &mut O,
    policy: &StepPolicy,
    surface: &mut P,
    center: BoundaryPoint,
) -> SweepStats {
    let mut stats = SweepStats::default();

    for _ in 0..policy.max_steps() {
        let sample = oscillator.sample();
        if policy.stops_at(sample) {
            stats.completed = true;
            return stats;
        }

        match policy.mode() {
            SweepMode::Octant => {
                stats.pixels_set += plot_octant(surface, center, sample);
                stats.points_emitted += 8;
            }
            SweepMode::FullCircle => {
                let p = sample.offset(center);
                if surface.plot(p.x, p.y) {
                    stats.pixels_set += 1;
                }
                stats.points_emitted += 1;
            }
        }
        stats.samples += 1;
        oscillator.advance();
    }

    stats.completed = policy.bound_is_natural();
    if !stats.completed {
        log::debug!(
            "Octant sweep hit its {} step bound without reaching the diagonal",
            policy.max_steps()
        );
    }
    stats
}
