//! Plain-text report sections.
//!
//! Table builders take finished results and only format; the `*_section`
//! functions also run the measurements.

use crate::config::BenchConfig;
use crate::harness::{run_benchmark, winner, BenchResult, InstabilityRule};
use df2circle_compute::{
    stability_drift, state_norm_drift, sweep, AlgorithmVariant, RecurrenceCoefficients,
    SweepMode,
};
use df2circle_core::{BoundaryPoint, Framebuffer, PrecisionFormat};

const RULE: &str = "----------------------------------------------------------------";
const BANNER: &str = "================================================================";

const PREVIEW_VARIANTS: [AlgorithmVariant; 2] =
    [AlgorithmVariant::Df2Real, AlgorithmVariant::Bresenham];

const FAIR_COMPARISON_RUNS: [(AlgorithmVariant, SweepMode); 4] = [
    (AlgorithmVariant::Df2Fixed, SweepMode::FullCircle),
    (AlgorithmVariant::Df2Fixed, SweepMode::Octant),
    (AlgorithmVariant::Bresenham, SweepMode::Octant),
    (AlgorithmVariant::Bresenham, SweepMode::FullCircle),
];

fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, BANNER)
}

/// ASCII renderings of the DF2 and midpoint circles, one after the other.
pub fn preview(radius: i32, size: u32) -> String {
    let mut out = format!("VISUAL COMPARISON (radius={}):\n{}\n", radius, RULE);

    let mut framebuffer = Framebuffer::new(size, size);
    for variant in PREVIEW_VARIANTS {
        framebuffer.clear();
        sweep(variant, &mut framebuffer, BoundaryPoint::ORIGIN, radius);
        out.push_str(&format!(
            "\n{} ({} muls/iter):\n",
            variant.display_name(),
            variant.multiplies_per_step()
        ));
        out.push_str(&framebuffer.to_ascii('#', ' '));
    }
    out
}

/// One radius block of a timing table. A winner line follows when any
/// result is stable and `show_winner` is set.
pub fn timing_table(
    radius: i32,
    results: &[BenchResult],
    with_mode: bool,
    show_winner: bool,
) -> String {
    let width = if with_mode { 34 } else { 24 };
    let mut out = format!(
        "Radius = {}:\n{:<width$} {:>10} {:>8} {:>10}\n{}\n",
        radius,
        "Algorithm",
        "Time(us)",
        "Pixels",
        "ns/pixel",
        RULE,
        width = width
    );

    for result in results {
        let label = result.label(with_mode);
        let row = match (result.unstable, result.ns_per_pixel) {
            (false, Some(ns_per_pixel)) => format!(
                "{:<width$} {:>10.2} {:>8} {:>10.2}\n",
                label,
                result.mean_micros,
                result.pixels,
                ns_per_pixel,
                width = width
            ),
            _ => format!(
                "{:<width$} {:>10} {:>8} {:>10}\n",
                label,
                "UNSTABLE",
                "---",
                "---",
                width = width
            ),
        };
        out.push_str(&row);
    }

    if show_winner {
        if let Some(best) = winner(results) {
            out.push_str(&format!(">>> WINNER: {}\n", best.label(with_mode)));
        }
    }
    out
}

/// Time every variant in octant mode at each configured radius.
pub fn performance_section(config: &BenchConfig) -> String {
    let mut out = heading("PERFORMANCE BENCHMARKS:");
    for &radius in &config.benchmark_radii {
        log::info!("Benchmarking radius {}", radius);
        let results: Vec<_> = AlgorithmVariant::ALL
            .iter()
            .map(|&variant| {
                run_benchmark(
                    variant,
                    SweepMode::Octant,
                    radius,
                    config.iterations,
                    config.instability,
                )
            })
            .collect();
        out.push('\n');
        out.push_str(&timing_table(radius, &results, false, true));
    }
    out
}

/// Coefficient and drift per radius, in real arithmetic.
pub fn stability_table(radii: &[i32], revolutions: u32) -> String {
    let mut out = heading(&format!(
        "STABILITY ANALYSIS ({} revolutions, float64):",
        revolutions
    ));
    out.push_str(&format!(
        "{:>8} {:>22} {:>15} {:>15}\n{}\n",
        "Radius", "2*cos(omega)", "Amplitude Drift", "State Drift", RULE
    ));

    for &radius in radii {
        let Some(coefficients) = RecurrenceCoefficients::for_radius(radius) else {
            log::warn!("Skipping non-positive stability radius {}", radius);
            continue;
        };
        out.push_str(&format!(
            "{:>8} {:>22.15} {:>15.6} {:>15.1}\n",
            radius,
            coefficients.coeff,
            stability_drift(radius, revolutions),
            state_norm_drift(radius, revolutions)
        ));
    }
    out
}

/// Critical radius per format, with coefficient headroom at `reference_radius`.
///
/// Headroom is `(2 − 2cos ω)` in units of the format's resolution; below
/// about 2 the coefficient can no longer be told apart from 2.0.
pub fn critical_radius_table(formats: &[PrecisionFormat], reference_radius: i32) -> String {
    let mut out = heading("CRITICAL RADIUS BY PRECISION:");
    out.push_str(&format!(
        "{:<20} {:>9} {:>12} {:>16}\n{}\n",
        "Format",
        "Frac Bits",
        "r_crit",
        format!("Headroom@r={}", reference_radius),
        RULE
    ));

    for format in formats {
        out.push_str(&format!(
            "{:<20} {:>9} {:>12.0} {:>16.3e}\n",
            format.name,
            format.fractional_bits,
            format.critical_radius(),
            format.coefficient_headroom(reference_radius as f64)
        ));
    }
    out
}

/// Octant symmetry against plotting the whole circle, for DF2 Q16.16 and
/// the midpoint baseline.
pub fn fair_comparison_section(config: &BenchConfig) -> String {
    let mut out = heading("FAIR COMPARISON: WITH AND WITHOUT 8-WAY SYMMETRY");
    for &radius in &config.fair_comparison_radii {
        log::info!("Fair comparison at radius {}", radius);
        let results: Vec<_> = FAIR_COMPARISON_RUNS
            .iter()
            .map(|&(variant, mode)| {
                run_benchmark(
                    variant,
                    mode,
                    radius,
                    config.iterations,
                    InstabilityRule::EMPTY_ONLY,
                )
            })
            .collect();
        out.push('\n');
        out.push_str(&timing_table(radius, &results, true, false));
    }
    out
}

/// The whole report.
pub fn full_report(config: &BenchConfig) -> String {
    let reference_radius = config.benchmark_radii.iter().copied().max().unwrap_or(100);
    let sections = [
        preview(config.preview_radius, config.preview_size),
        performance_section(config),
        stability_table(&config.stability_radii, config.stability_revolutions),
        critical_radius_table(&config.formats, reference_radius),
        fair_comparison_section(config),
    ];

    format!(
        "{}\n  DF2 Circle Algorithm Benchmark\n{}\n\n{}",
        BANNER,
        BANNER,
        sections.join("\n\n")
    )
}
