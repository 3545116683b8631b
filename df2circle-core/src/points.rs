use serde::{Deserialize, Serialize};

/// Integer boundary point relative to a circle centre (or absolute, once offset).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BoundaryPoint {
    pub x: i32,
    pub y: i32,
}

impl BoundaryPoint {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `center`.
    #[inline]
    pub fn offset(self, center: BoundaryPoint) -> Self {
        Self {
            x: center.x.wrapping_add(self.x),
            y: center.y.wrapping_add(self.y),
        }
    }

    /// Closed first octant: `0 <= y <= x`.
    #[inline]
    pub fn in_first_octant(&self) -> bool {
        0 <= self.y && self.y <= self.x
    }

    /// x² + y², widened so it cannot overflow.
    #[inline]
    pub fn norm_sq(&self) -> i64 {
        let x = self.x as i64;
        let y = self.y as i64;
        x * x + y * y
    }
}

impl From<(i32, i32)> for BoundaryPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
