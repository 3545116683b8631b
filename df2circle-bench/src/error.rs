//! Benchmark driver error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
