pub mod fixed;
pub mod octant;
pub mod points;
pub mod precision;
pub mod scalar;
pub mod surface;

pub use fixed::{Fixed, Q16_16, Q8_8};
pub use octant::{expand_octant, plot_octant};
pub use points::BoundaryPoint;
pub use precision::{
    angular_step, coefficient_headroom, critical_radius, standard_formats, PrecisionFormat,
    ANGULAR_STEP_DIVISOR, CRITICAL_RADIUS_FACTOR,
};
pub use scalar::OscillatorScalar;
pub use surface::{Framebuffer, PixelSurface, PointCollector};
