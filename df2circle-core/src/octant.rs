//! Eight-way symmetry expansion of first-octant samples.

use crate::{BoundaryPoint, PixelSurface};

/// Mirror one first-octant sample into the eight symmetric boundary points,
/// translated by `center`.
///
/// Emission order is `(x, y) (-x, y) (x, -y) (-x, -y) (y, x) (-y, x) (y, -x) (-y, -x)`.
/// Coincident points (on the axes or the diagonal) are emitted more than once;
/// deduplication is left to the surface.
#[inline]
pub fn expand_octant(center: BoundaryPoint, sample: BoundaryPoint) -> [BoundaryPoint; 8] {
    let BoundaryPoint { x, y } = sample;
    let (nx, ny) = (x.wrapping_neg(), y.wrapping_neg());
    [
        BoundaryPoint::new(x, y),
        BoundaryPoint::new(nx, y),
        BoundaryPoint::new(x, ny),
        BoundaryPoint::new(nx, ny),
        BoundaryPoint::new(y, x),
        BoundaryPoint::new(ny, x),
        BoundaryPoint::new(y, nx),
        BoundaryPoint::new(ny, nx),
    ]
    .map(|p| p.offset(center))
}

/// Plot all eight mirrors of `sample`. Returns how many pixels were newly set.
#[inline]
pub fn plot_octant<P: PixelSurface + ?Sized>(
    surface: &mut P,
    center: BoundaryPoint,
    sample: BoundaryPoint,
) -> usize {
    expand_octant(center, sample)
        .into_iter()
        .filter(|p| surface.plot(p.x, p.y))
        .count()
}
