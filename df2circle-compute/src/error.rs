//! Compute error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseVariantError {
    #[error("Unknown algorithm variant: {0}")]
    UnknownVariant(String),
}
