//! Pixel surfaces that boundary points are plotted into.

use crate::BoundaryPoint;
use std::collections::BTreeSet;

/// Destination for plotted boundary points.
///
/// Plotting is idempotent: marking an already-set pixel changes nothing.
pub trait PixelSurface {
    /// Mark `(x, y)`. Returns true when the pixel was not set before.
    /// Targets outside the surface are clipped and return false.
    fn plot(&mut self, x: i32, y: i32) -> bool;

    /// Whether `(x, y)` is set. Always false outside the surface.
    fn is_set(&self, x: i32, y: i32) -> bool;

    /// Number of distinct pixels set.
    fn pixel_count(&self) -> usize;
}

/// Boolean pixel grid with its origin at the grid centre.
///
/// Coordinate `(x, y)` maps to column `x + width/2` and row `y + height/2`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
    set_count: usize,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width as usize * height as usize],
            set_count: 0,
        }
    }

    /// Square framebuffer with room for a circle of `radius` around the origin.
    ///
    /// The side is `3 · radius`, saturating at `u32::MAX`; memory grows with
    /// the square of the side, so very large radii belong on a
    /// [`PointCollector`] instead.
    pub fn for_radius(radius: i32) -> Self {
        let side = Self::side_for_radius(radius);
        Self::new(side, side)
    }

    fn side_for_radius(radius: i32) -> u32 {
        (radius.max(1) as u32).saturating_mul(3)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Unset every pixel.
    pub fn clear(&mut self) {
        self.pixels.fill(false);
        self.set_count = 0;
    }

    /// Row-major index of a centred coordinate, if it lies on the grid.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let col = x as i64 + (self.width / 2) as i64;
        let row = y as i64 + (self.height / 2) as i64;
        if col >= 0 && col < self.width as i64 && row >= 0 && row < self.height as i64 {
            Some(row as usize * self.width as usize + col as usize)
        } else {
            None
        }
    }

    /// Render as text, one line per row, top row first.
    pub fn to_ascii(&self, on: char, off: char) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.pixels.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|&set| if set { on } else { off }));
            out.push('\n');
        }
        out
    }
}

impl PixelSurface for Framebuffer {
    #[inline]
    fn plot(&mut self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(i) if !self.pixels[i] => {
                self.pixels[i] = true;
                self.set_count += 1;
                true
            }
            _ => false,
        }
    }

    fn is_set(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.pixels[i])
    }

    fn pixel_count(&self) -> usize {
        self.set_count
    }
}

/// Unbounded surface that records every distinct point plotted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointCollector {
    points: BTreeSet<BoundaryPoint>,
}

impl PointCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct points in (x, y) order.
    pub fn points(&self) -> impl Iterator<Item = BoundaryPoint> + '_ {
        self.points.iter().copied()
    }

    pub fn contains(&self, point: BoundaryPoint) -> bool {
        self.points.contains(&point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PixelSurface for PointCollector {
    #[inline]
    fn plot(&mut self, x: i32, y: i32) -> bool {
        self.points.insert(BoundaryPoint::new(x, y))
    }

    fn is_set(&self, x: i32, y: i32) -> bool {
        self.contains(BoundaryPoint::new(x, y))
    }

    fn pixel_count(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_grid_centre() {
        let mut fb = Framebuffer::new(5, 5);
        assert!(fb.plot(0, 0));
        let ascii = fb.to_ascii('#', '.');
        assert_eq!(ascii, ".....\n.....\n..#..\n.....\n.....\n");
    }

    #[test]
    fn plot_is_idempotent() {
        let mut fb = Framebuffer::new(10, 10);
        assert!(fb.plot(1, 2));
        assert!(!fb.plot(1, 2));
        assert_eq!(fb.pixel_count(), 1);
        assert!(fb.is_set(1, 2));
    }

    #[test]
    fn out_of_bounds_is_clipped() {
        let mut fb = Framebuffer::new(10, 10);
        assert!(!fb.plot(5, 0)); // column 10 is past the edge
        assert!(!fb.plot(0, -6));
        assert!(!fb.plot(i32::MAX, i32::MIN));
        assert!(fb.plot(4, -5));
        assert_eq!(fb.pixel_count(), 1);
        assert!(!fb.is_set(100, 100));
    }

    #[test]
    fn clear_resets_pixels_and_count() {
        let mut fb = Framebuffer::new(4, 4);
        fb.plot(0, 0);
        fb.plot(1, 1);
        fb.clear();
        assert_eq!(fb.pixel_count(), 0);
        assert!(!fb.is_set(0, 0));
    }

    #[test]
    fn for_radius_fits_the_circle() {
        let fb = Framebuffer::for_radius(20);
        assert_eq!((fb.width(), fb.height()), (60, 60));
        let tiny = Framebuffer::for_radius(-3);
        assert_eq!(tiny.width(), 3);
    }

    #[test]
    fn side_saturates_for_huge_radii() {
        assert_eq!(Framebuffer::side_for_radius(1_431_655_765), 4_294_967_295);
        assert_eq!(Framebuffer::side_for_radius(1_500_000_000), u32::MAX);
        assert_eq!(Framebuffer::side_for_radius(i32::MAX), u32::MAX);
    }

    #[test]
    fn empty_framebuffer_renders_nothing() {
        let fb = Framebuffer::new(0, 0);
        assert_eq!(fb.to_ascii('#', ' '), "");
        assert_eq!(fb.pixel_count(), 0);
    }

    #[test]
    fn collector_keeps_distinct_points_in_order() {
        let mut collector = PointCollector::new();
        assert!(collector.plot(2, 1));
        assert!(collector.plot(-1, 5));
        assert!(!collector.plot(2, 1));
        assert_eq!(collector.len(), 2);
        let points: Vec<_> = collector.points().collect();
        assert_eq!(points, vec![BoundaryPoint::new(-1, 5), BoundaryPoint::new(2, 1)]);
    }
}
