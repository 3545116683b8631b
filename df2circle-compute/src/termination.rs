//! When a sweep stops.
//!
//! An octant sweep ends on the first sample outside the closed first octant
//! (`y > x`). A full-circle sweep cannot detect its own end, so it runs a
//! step count fixed in advance. Octant sweeps share the same count as a
//! safety bound: a collapsed fixed-point recurrence may never reach the
//! diagonal.

use df2circle_core::BoundaryPoint;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Extra steps past one revolution for full-circle sweeps.
pub const FULL_CIRCLE_MARGIN: usize = 10;

/// How a sweep covers the circle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SweepMode {
    /// Generate the first octant and mirror each sample eight ways.
    #[default]
    Octant,
    /// Plot every sample of a whole revolution directly.
    FullCircle,
}

impl SweepMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            SweepMode::Octant => "8-way sym",
            SweepMode::FullCircle => "full circle",
        }
    }
}

/// `ceil(2π / ω) + FULL_CIRCLE_MARGIN`.
pub fn full_circle_steps(omega: f64) -> usize {
    (TAU / omega).ceil() as usize + FULL_CIRCLE_MARGIN
}

/// `floor(revolutions · 2π / ω)`.
pub fn revolution_steps(omega: f64, revolutions: u32) -> usize {
    (revolutions as f64 * TAU / omega) as usize
}

/// Step bound and stop test for one sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepPolicy {
    mode: SweepMode,
    max_steps: usize,
}

impl StepPolicy {
    pub fn new(mode: SweepMode, omega: f64) -> Self {
        Self {
            mode,
            max_steps: full_circle_steps(omega),
        }
    }

    pub fn mode(&self) -> SweepMode {
        self.mode
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// True when `sample` ends the sweep. The sample itself is not plotted.
    #[inline]
    pub fn stops_at(&self, sample: BoundaryPoint) -> bool {
        self.mode == SweepMode::Octant && sample.y > sample.x
    }

    /// Whether running out of steps is the expected way for this sweep to end.
    pub fn bound_is_natural(&self) -> bool {
        self.mode == SweepMode::FullCircle
    }
}
