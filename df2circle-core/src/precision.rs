//! Precision limits of the circle recurrence.
//!
//! The recurrence multiplier `2cos(ω)` approaches 2.0 as the radius grows.
//! Once a numeric format can no longer tell it apart from 2.0 the pole at
//! `z = 1` takes over and the oscillation collapses into a ramp. This module
//! estimates the radius where that happens for a given fractional bit count.

use serde::{Deserialize, Serialize};

/// Divisor in `ω = 1 / (1.5 · radius)`. Chosen empirically; published pixel
/// counts depend on this exact value.
pub const ANGULAR_STEP_DIVISOR: f64 = 1.5;

/// Empirical factor in `r_crit ≈ 0.47 · 2^(f/2)`. Published critical radii
/// depend on this exact value.
pub const CRITICAL_RADIUS_FACTOR: f64 = 0.47;

/// Angular step per recurrence iteration for a circle of `radius`.
#[inline]
pub fn angular_step(radius: f64) -> f64 {
    1.0 / (ANGULAR_STEP_DIVISOR * radius)
}

/// Largest radius for which a format with `fractional_bits` keeps the
/// recurrence usable.
///
/// A design heuristic rather than a derived bound: `0.47 · 2^(f/2)`.
pub fn critical_radius(fractional_bits: u32) -> f64 {
    CRITICAL_RADIUS_FACTOR * libm::pow(2.0, fractional_bits as f64 / 2.0)
}

/// Number of quantisation steps between `2cos(ω)` and 2.0 in a format with
/// `fractional_bits`.
///
/// Computed as `4·sin²(ω/2)·2^f`, which equals `(2 − 2cos ω)·2^f` without the
/// cancellation. Around 2 at the critical radius for every format.
pub fn coefficient_headroom(radius: f64, fractional_bits: u32) -> f64 {
    let half_step = libm::sin(angular_step(radius) / 2.0);
    4.0 * half_step * half_step * libm::ldexp(1.0, fractional_bits as i32)
}

/// A named numeric format, described by its fractional bit count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecisionFormat {
    pub name: String,
    pub fractional_bits: u32,
}

impl PrecisionFormat {
    pub fn new(name: impl Into<String>, fractional_bits: u32) -> Self {
        Self {
            name: name.into(),
            fractional_bits,
        }
    }

    pub fn critical_radius(&self) -> f64 {
        critical_radius(self.fractional_bits)
    }

    /// Whether `radius` is at or below this format's critical radius.
    pub fn supports_radius(&self, radius: f64) -> bool {
        radius <= self.critical_radius()
    }

    pub fn coefficient_headroom(&self, radius: f64) -> f64 {
        coefficient_headroom(radius, self.fractional_bits)
    }
}

/// The formats of the published critical-radius table.
pub fn standard_formats() -> Vec<PrecisionFormat> {
    vec![
        PrecisionFormat::new("Q8.8", 8),
        PrecisionFormat::new("Q1.15", 15),
        PrecisionFormat::new("Q16.16", 16),
        PrecisionFormat::new("Q1.31", 31),
        PrecisionFormat::new("Float32 (mantissa)", 23),
        PrecisionFormat::new("Float64 (mantissa)", 52),
    ]
}
