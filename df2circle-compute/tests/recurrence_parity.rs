use df2circle_compute::{
    sweep, sweep_with_mode, AlgorithmVariant, BoundaryPoint, Df2Oscillator, Oscillator,
    PointCollector, RecurrenceCoefficients, StepPolicy, SweepMode,
};

fn collect(variant: AlgorithmVariant, radius: i32) -> PointCollector {
    let mut collector = PointCollector::new();
    sweep(variant, &mut collector, BoundaryPoint::ORIGIN, radius);
    collector
}

fn radial_error(p: BoundaryPoint, radius: i32) -> f64 {
    ((p.norm_sq() as f64).sqrt() - radius as f64).abs()
}

/// Every pixel of `a` has a pixel of `b` among its eight neighbours or itself.
fn covered_by(a: &PointCollector, b: &PointCollector) -> bool {
    a.points().all(|p| {
        (-1..=1).any(|dx| (-1..=1).any(|dy| b.contains(BoundaryPoint::new(p.x + dx, p.y + dy))))
    })
}

#[test]
fn df2_pixels_stay_within_one_pixel_of_the_true_circle() {
    for radius in 1..=300 {
        let df2 = collect(AlgorithmVariant::Df2Real, radius);
        for p in df2.points() {
            assert!(radial_error(p, radius) < 1.0, "radius {}: {:?}", radius, p);
        }
    }
}

#[test]
fn df2_and_midpoint_cover_each_other() {
    for radius in 1..=120 {
        let df2 = collect(AlgorithmVariant::Df2Real, radius);
        let midpoint = collect(AlgorithmVariant::Bresenham, radius);
        assert!(covered_by(&df2, &midpoint), "radius {}", radius);
        assert!(covered_by(&midpoint, &df2), "radius {}", radius);
    }
}

#[test]
fn df2_draws_at_least_as_many_pixels_as_midpoint() {
    // Samples are spaced 2/3 px, so the octant walk doubles up on some columns
    for radius in 1..=300 {
        let df2 = collect(AlgorithmVariant::Df2Real, radius).len() as f64;
        let midpoint = collect(AlgorithmVariant::Bresenham, radius).len() as f64;
        let ratio = df2 / midpoint;
        assert!((1.0..1.5).contains(&ratio), "radius {}: ratio {}", radius, ratio);
    }
}

#[test]
fn small_radii_match_midpoint_exactly() {
    for radius in [1, 3, 8] {
        assert_eq!(
            collect(AlgorithmVariant::Df2Real, radius),
            collect(AlgorithmVariant::Bresenham, radius),
            "radius {}",
            radius
        );
    }
}

#[test]
fn octant_samples_lie_in_the_first_octant_near_the_circle() {
    for radius in 1..400 {
        let coefficients = RecurrenceCoefficients::for_radius(radius).unwrap();
        let policy = StepPolicy::new(SweepMode::Octant, coefficients.omega);
        let mut oscillator = Df2Oscillator::<f64>::new(&coefficients);
        let bound = 2 * radius as i64 + 1;
        let r_sq = radius as i64 * radius as i64;

        let mut reached_diagonal = false;
        for _ in 0..policy.max_steps() {
            let sample = oscillator.sample();
            if policy.stops_at(sample) {
                reached_diagonal = true;
                break;
            }
            assert!(sample.in_first_octant(), "radius {}: {:?}", radius, sample);
            assert!(
                (sample.norm_sq() - r_sq).abs() <= bound,
                "radius {}: {:?}",
                radius,
                sample
            );
            oscillator.advance();
        }
        assert!(reached_diagonal, "radius {}", radius);
    }
}

#[test]
fn coupled_form_agrees_with_df2() {
    for radius in [5, 17, 64, 150] {
        let df2 = collect(AlgorithmVariant::Df2Real, radius);
        let coupled = collect(AlgorithmVariant::CoupledReal, radius);
        assert!(covered_by(&df2, &coupled), "radius {}", radius);
        assert!(covered_by(&coupled, &df2), "radius {}", radius);
    }
}

#[test]
fn full_circle_sweep_stays_on_the_circle() {
    for radius in [1, 10, 25, 100, 300] {
        let mut collector = PointCollector::new();
        let stats = sweep_with_mode(
            AlgorithmVariant::Df2Real,
            SweepMode::FullCircle,
            &mut collector,
            BoundaryPoint::ORIGIN,
            radius,
        );
        assert!(stats.completed);
        for p in collector.points() {
            assert!(radial_error(p, radius) <= 1.0, "radius {}: {:?}", radius, p);
        }
    }
}

#[test]
fn full_circle_closes_the_loop() {
    // 2π/ω + margin steps revisit the start, so every octant is populated
    let mut collector = PointCollector::new();
    sweep_with_mode(
        AlgorithmVariant::Df2Real,
        SweepMode::FullCircle,
        &mut collector,
        BoundaryPoint::ORIGIN,
        100,
    );
    for (x, y) in [(100, 0), (0, 100), (-100, 0), (0, -100)] {
        assert!(collector.contains(BoundaryPoint::new(x, y)), "({}, {})", x, y);
    }
}
