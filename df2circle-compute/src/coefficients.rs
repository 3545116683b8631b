use df2circle_core::angular_step;

/// Recurrence coefficients for one sweep, derived from the radius.
///
/// Trigonometry goes through `libm` so every platform derives bit-identical
/// coefficients; fixed-point output depends on them exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecurrenceCoefficients {
    pub radius: f64,
    /// Angular step per iteration, `1 / (1.5 · radius)`.
    pub omega: f64,
    /// DF2 multiplier, `2cos(ω)`.
    pub coeff: f64,
    /// Rebuilds the quadrature component from consecutive DF2 outputs, `−1/ω`.
    pub scale: f64,
    pub cos_omega: f64,
    pub sin_omega: f64,
}

impl RecurrenceCoefficients {
    /// Coefficients for a circle of `radius`, or `None` when `radius <= 0`.
    pub fn for_radius(radius: i32) -> Option<Self> {
        if radius <= 0 {
            return None;
        }
        let radius = radius as f64;
        let omega = angular_step(radius);
        let cos_omega = libm::cos(omega);
        Some(Self {
            radius,
            omega,
            coeff: 2.0 * cos_omega,
            scale: -1.0 / omega,
            cos_omega,
            sin_omega: libm::sin(omega),
        })
    }
}
