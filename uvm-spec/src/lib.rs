//! # UVM Specification
//!
//! Instruction set for a small memory-to-memory virtual machine whose
//! instructions pack operand fields at arbitrary, non-byte-aligned bit
//! offsets.
//!
//! ## Key Features
//! - 3-bit opcode tag, four instructions (LOAD, WRITE, MIN, READ)
//! - 10, 17 and 23-bit operand fields
//! - Fixed per-opcode instruction lengths (6, 7, 8, 10 bytes)
//! - No registers, no control flow: every instruction works on flat memory
//! - Single bit-field codec shared by encoder and decoder

pub mod bits;
pub mod opcode;
pub mod instruction;
pub mod encoding;
pub mod config;
pub mod error;
pub mod program;

pub use bits::{pack, unpack, RangeError};
pub use opcode::Opcode;
pub use instruction::Instruction;
pub use config::{Config, ConfigError};
pub use error::UvmError;
pub use program::{hex_bytes, Program};

/// Memory cell type
pub type Word = u32;

/// Memory address type
pub type Address = u64;
