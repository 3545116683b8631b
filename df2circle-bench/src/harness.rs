//! Wall-clock timing of circle sweeps.

use df2circle_compute::{sweep_with_mode, AlgorithmVariant, SweepMode};
use df2circle_core::{BoundaryPoint, Framebuffer, PixelSurface};
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// When a timed run counts as collapsed rather than as a circle.
///
/// A run is unstable when it sets fewer than `min_pixels` pixels at a radius
/// above `above_radius`. Octant sweeps that never reach the diagonal are
/// unstable regardless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstabilityRule {
    pub min_pixels: usize,
    pub above_radius: i32,
}

impl Default for InstabilityRule {
    fn default() -> Self {
        Self {
            min_pixels: 10,
            above_radius: 50,
        }
    }
}

impl InstabilityRule {
    /// Only an empty framebuffer is unstable.
    pub const EMPTY_ONLY: Self = Self {
        min_pixels: 1,
        above_radius: 0,
    };

    pub fn is_unstable(&self, radius: i32, pixels: usize) -> bool {
        pixels < self.min_pixels && radius > self.above_radius
    }
}

/// Timing of one algorithm at one radius.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchResult {
    pub variant: AlgorithmVariant,
    pub mode: SweepMode,
    pub radius: i32,
    pub iterations: u32,
    /// Mean wall time per sweep, framebuffer clearing excluded.
    pub mean_micros: f64,
    /// Pixels set by the last sweep.
    pub pixels: usize,
    /// `None` when no pixel was set.
    pub ns_per_pixel: Option<f64>,
    pub unstable: bool,
}

impl BenchResult {
    /// Row label, e.g. "DF2 Float" or "Bresenham, full circle".
    pub fn label(&self, with_mode: bool) -> String {
        if with_mode {
            format!("{}, {}", self.variant.display_name(), self.mode.display_name())
        } else {
            self.variant.display_name().to_string()
        }
    }
}

/// Time `iterations` sweeps into a cleared framebuffer sized for `radius`.
pub fn run_benchmark(
    variant: AlgorithmVariant,
    mode: SweepMode,
    radius: i32,
    iterations: u32,
    rule: InstabilityRule,
) -> BenchResult {
    let mut framebuffer = Framebuffer::for_radius(radius);
    let mut total = Duration::ZERO;
    let mut pixels = 0;
    let mut completed = true;

    for _ in 0..iterations {
        framebuffer.clear();
        let start = Instant::now();
        let stats = sweep_with_mode(
            variant,
            mode,
            &mut framebuffer,
            BoundaryPoint::ORIGIN,
            black_box(radius),
        );
        total += start.elapsed();
        completed = black_box(stats).completed;
        pixels = framebuffer.pixel_count();
    }

    let mean_micros = if iterations == 0 {
        0.0
    } else {
        total.as_secs_f64() * 1e6 / iterations as f64
    };
    let ns_per_pixel = (pixels > 0).then(|| mean_micros * 1000.0 / pixels as f64);
    let unstable = !completed || rule.is_unstable(radius, pixels);
    if unstable {
        log::warn!(
            "{} at radius {} collapsed to {} pixels",
            variant.display_name(),
            radius,
            pixels
        );
    }

    BenchResult {
        variant,
        mode,
        radius,
        iterations,
        mean_micros,
        pixels,
        ns_per_pixel,
        unstable,
    }
}

/// Fastest stable result.
pub fn winner(results: &[BenchResult]) -> Option<&BenchResult> {
    results
        .iter()
        .filter(|r| !r.unstable)
        .min_by(|a, b| a.mean_micros.total_cmp(&b.mean_micros))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(variant: AlgorithmVariant, mean_micros: f64, unstable: bool) -> BenchResult {
        BenchResult {
            variant,
            mode: SweepMode::Octant,
            radius: 100,
            iterations: 1,
            mean_micros,
            pixels: 600,
            ns_per_pixel: Some(mean_micros * 1000.0 / 600.0),
            unstable,
        }
    }

    #[test]
    fn default_rule_flags_collapsed_large_circles() {
        let rule = InstabilityRule::default();
        assert!(rule.is_unstable(75, 9));
        assert!(!rule.is_unstable(75, 10));
        assert!(!rule.is_unstable(50, 0));
    }

    #[test]
    fn empty_only_rule() {
        assert!(InstabilityRule::EMPTY_ONLY.is_unstable(25, 0));
        assert!(!InstabilityRule::EMPTY_ONLY.is_unstable(25, 1));
    }

    #[test]
    fn benchmark_reports_sweep_pixels() {
        let result = run_benchmark(
            AlgorithmVariant::Df2Real,
            SweepMode::Octant,
            10,
            3,
            InstabilityRule::default(),
        );
        let mut framebuffer = Framebuffer::for_radius(10);
        let expected = df2circle_compute::sweep(
            AlgorithmVariant::Df2Real,
            &mut framebuffer,
            BoundaryPoint::ORIGIN,
            10,
        );
        assert_eq!(result.pixels, expected);
        assert_eq!(result.iterations, 3);
        assert!(!result.unstable);
        assert!(result.ns_per_pixel.is_some());
    }

    #[test]
    fn collapsed_fixed_point_run_is_unstable() {
        let result = run_benchmark(
            AlgorithmVariant::Df2Fixed,
            SweepMode::Octant,
            300,
            1,
            InstabilityRule::default(),
        );
        // Enough pixels to pass the count rule, but the sweep never finished
        assert!(result.pixels >= 10);
        assert!(result.unstable);
    }

    #[test]
    fn winner_skips_unstable_results() {
        let results = vec![
            result(AlgorithmVariant::Df2Fixed, 0.5, true),
            result(AlgorithmVariant::Df2Real, 2.0, false),
            result(AlgorithmVariant::Bresenham, 1.5, false),
        ];
        assert_eq!(winner(&results).map(|r| r.variant), Some(AlgorithmVariant::Bresenham));
        assert!(winner(&results[..1]).is_none());
    }

    #[test]
    fn labels() {
        let mut r = result(AlgorithmVariant::Bresenham, 1.0, false);
        assert_eq!(r.label(false), "Bresenham");
        r.mode = SweepMode::FullCircle;
        assert_eq!(r.label(true), "Bresenham, full circle");
    }
}
