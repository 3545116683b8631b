//! Benchmark configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes.

use crate::error::BenchError;
use crate::harness::InstabilityRule;
use df2circle_core::{standard_formats, PrecisionFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Radius of the ASCII preview circles.
    pub preview_radius: i32,
    /// Side length of the square preview framebuffer.
    pub preview_size: u32,
    pub benchmark_radii: Vec<i32>,
    /// Sweeps timed per algorithm and radius.
    pub iterations: u32,
    /// Marks collapsed fixed-point runs in the performance table.
    pub instability: InstabilityRule,
    pub stability_radii: Vec<i32>,
    pub stability_revolutions: u32,
    pub fair_comparison_radii: Vec<i32>,
    pub formats: Vec<PrecisionFormat>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            preview_radius: 20,
            preview_size: 50,
            benchmark_radii: vec![10, 25, 50, 75, 100, 150, 200],
            iterations: 50_000,
            instability: InstabilityRule::default(),
            stability_radii: vec![10, 50, 100, 500, 1000, 5000],
            stability_revolutions: 100,
            fair_comparison_radii: vec![25, 50, 75, 100],
            formats: standard_formats(),
        }
    }
}

impl BenchConfig {
    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BenchError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, BenchError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.iterations == 0 {
            return Err(BenchError::Invalid("iterations must be at least 1".into()));
        }
        if self.preview_radius <= 0 || self.preview_size == 0 {
            return Err(BenchError::Invalid(format!(
                "preview radius {} and size {} must be positive",
                self.preview_radius, self.preview_size
            )));
        }
        if let Some(format) = self.formats.iter().find(|f| f.fractional_bits == 0) {
            return Err(BenchError::Invalid(format!(
                "format {} has no fractional bits",
                format.name
            )));
        }
        Ok(())
    }
}
