//! # Error Types for UVM

use crate::bits::RangeError;
use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UvmError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    // Encoding errors
    #[error("Bit field error: {0}")]
    Range(#[from] RangeError),

    // I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
