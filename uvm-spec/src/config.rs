//! # Machine Configuration
//!
//! Memory geometry for the executor. The address fields are 23 bits wide,
//! so memory can never usefully exceed 2^23 cells.

use crate::opcode::ADDRESS_BITS;
use std::fmt;

/// Default number of memory cells
pub const DEFAULT_MEMORY_SIZE: usize = 2048;

/// Smallest memory a configuration may declare
pub const MIN_MEMORY_SIZE: usize = 1024;

/// Largest memory addressable by a 23-bit address field
pub const MAX_MEMORY_SIZE: usize = 1 << ADDRESS_BITS;

/// Machine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    /// Number of memory cells
    pub memory_size: usize,
}

impl Config {
    /// Default configuration: 2048 cells
    pub const DEFAULT: Self = Self {
        memory_size: DEFAULT_MEMORY_SIZE,
    };

    /// Create a new configuration with validation
    pub const fn new(memory_size: usize) -> Result<Self, ConfigError> {
        let config = Self { memory_size };
        if memory_size < MIN_MEMORY_SIZE {
            return Err(ConfigError::MemoryTooSmall(memory_size));
        }
        if memory_size > MAX_MEMORY_SIZE {
            return Err(ConfigError::MemoryTooLarge(memory_size));
        }
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::new(self.memory_size).map(|_| ())
    }

    /// Highest valid address
    #[inline]
    pub const fn last_address(&self) -> usize {
        self.memory_size - 1
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Config {{ memory: {} cells }}", self.memory_size)
    }
}

/// Configuration error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Memory must hold at least MIN_MEMORY_SIZE cells
    MemoryTooSmall(usize),
    /// Memory must fit the 23-bit address space
    MemoryTooLarge(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MemoryTooSmall(size) => {
                write!(f, "memory_size {} is below the minimum of {}", size, MIN_MEMORY_SIZE)
            }
            ConfigError::MemoryTooLarge(size) => {
                write!(f, "memory_size {} exceeds the 23-bit address space ({})", size, MAX_MEMORY_SIZE)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::DEFAULT;
        assert_eq!(config.memory_size, 2048);
        assert_eq!(config.last_address(), 2047);
        assert_eq!(Config::default(), config);
    }

    #[test]
    fn test_validation() {
        assert!(Config::new(1024).is_ok());
        assert!(Config::new(MAX_MEMORY_SIZE).is_ok());

        assert_eq!(Config::new(1023).unwrap_err(), ConfigError::MemoryTooSmall(1023));
        assert_eq!(
            Config::new(MAX_MEMORY_SIZE + 1).unwrap_err(),
            ConfigError::MemoryTooLarge(MAX_MEMORY_SIZE + 1)
        );

        let bad = Config { memory_size: 0 };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::MemoryTooSmall(10).to_string(),
            "memory_size 10 is below the minimum of 1024"
        );
    }
}
