//! Midpoint (Bresenham) circle, the reference the recurrences are compared to.

use crate::sweep::SweepStats;
use crate::termination::SweepMode;
use df2circle_core::{plot_octant, BoundaryPoint, PixelSurface};

/// Integer decision-variable walk over the octant from `(0, r)` to the diagonal.
///
/// Yields `(x, y)` with `x <= y`, the mirror image of the first octant.
/// The decision variable is kept in 64 bits so every `i32` radius is valid.
#[derive(Clone, Debug)]
pub struct MidpointOctant {
    x: i32,
    y: i32,
    decision: i64,
}

impl MidpointOctant {
    pub fn new(radius: i32) -> Self {
        Self {
            x: 0,
            y: radius,
            decision: 3 - 2 * radius as i64,
        }
    }
}

impl Iterator for MidpointOctant {
    type Item = BoundaryPoint;

    fn next(&mut self) -> Option<BoundaryPoint> {
        if self.x > self.y {
            return None;
        }
        let point = BoundaryPoint::new(self.x, self.y);
        let (x, y) = (self.x as i64, self.y as i64);
        if self.decision < 0 {
            self.decision += 4 * x + 6;
        } else {
            self.decision += 4 * (x - y) + 10;
            self.y -= 1;
        }
        self.x += 1;
        Some(point)
    }
}

/// Maps an octant walk onto each of the eight octants, in drawing order.
const OCTANT_MAPS: [fn(BoundaryPoint) -> BoundaryPoint; 8] = [
    |p| BoundaryPoint::new(p.x, p.y),
    |p| BoundaryPoint::new(p.y, p.x),
    |p| BoundaryPoint::new(p.y, -p.x),
    |p| BoundaryPoint::new(p.x, -p.y),
    |p| BoundaryPoint::new(-p.x, -p.y),
    |p| BoundaryPoint::new(-p.y, -p.x),
    |p| BoundaryPoint::new(-p.y, p.x),
    |p| BoundaryPoint::new(-p.x, p.y),
];

/// Midpoint circle of `radius` around `center`.
///
/// `Octant` mirrors each step eight ways. `FullCircle` walks each octant
/// separately with no mirroring, so both modes cost a comparable number of
/// plots as the recurrences' full-circle sweep.
pub fn midpoint_circle<P: PixelSurface + ?Sized>(
    mode: SweepMode,
    surface: &mut P,
    center: BoundaryPoint,
    radius: i32,
) -> SweepStats {
    if radius <= 0 {
        return SweepStats::empty();
    }

    let mut stats = SweepStats::empty();
    match mode {
        SweepMode::Octant => {
            for sample in MidpointOctant::new(radius) {
                stats.pixels_set += plot_octant(surface, center, sample);
                stats.points_emitted += 8;
                stats.samples += 1;
            }
        }
        SweepMode::FullCircle => {
            for map in OCTANT_MAPS {
                for sample in MidpointOctant::new(radius) {
                    let p = map(sample).offset(center);
                    if surface.plot(p.x, p.y) {
                        stats.pixels_set += 1;
                    }
                    stats.points_emitted += 1;
                    stats.samples += 1;
                }
            }
        }
    }
    stats
}
