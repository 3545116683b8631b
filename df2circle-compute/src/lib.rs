pub mod baseline;
pub mod coefficients;
pub mod error;
pub mod oscillator;
pub mod stability;
pub mod sweep;
pub mod termination;
pub mod variant;

pub use baseline::{midpoint_circle, MidpointOctant};
pub use coefficients::RecurrenceCoefficients;
pub use error::ParseVariantError;
pub use oscillator::{CoupledOscillator, Df2Oscillator, Oscillator, RecurrenceForm};
pub use stability::{stability_drift, stability_drift_with, state_norm_drift};
pub use sweep::{run_oscillator, sweep, sweep_recurrence, sweep_with_mode, SweepStats};
pub use termination::{
    full_circle_steps, revolution_steps, StepPolicy, SweepMode, FULL_CIRCLE_MARGIN,
};
pub use variant::AlgorithmVariant;

// Re-export core types for convenience
pub use df2circle_core::*;
