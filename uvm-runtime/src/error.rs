//! Runtime error types for UVM

use thiserror::Error;
use uvm_disassembler::DisassemblerError;
use uvm_spec::ConfigError;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Decode error: {0}")]
    Decode(#[from] DisassemblerError),

    #[error("Address {address} out of range for memory of {size} cells (instruction at byte offset {offset})")]
    AddressOutOfRange {
        address: u64,
        size: usize,
        offset: usize,
    },

    #[error("Invalid dump range {start}..={end} for memory of {size} cells")]
    InvalidDumpRange { start: usize, end: usize, size: usize },

    #[error("Cycle limit exceeded: {limit}")]
    CycleLimitExceeded { limit: u64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Memory image has {found} cells, configuration expects {expected}")]
    MemorySizeMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
