//! # UVM Runtime
//!
//! Execute packed UVM instruction streams against a flat word memory.
//!
//! The stream is walked front to back: fetch, decode, bounds-check every
//! address the instruction touches, execute, advance by the instruction's
//! encoded length. Execution ends when the cursor reaches the end of the
//! stream; there is no control flow.
//!
//! ## Example
//!
//! ```rust
//! use uvm_runtime::{VM, VMConfig};
//! use uvm_spec::Program;
//!
//! // LOAD 2 20 869
//! let program = Program::from_bytes(vec![0xA2, 0x00, 0x50, 0x36, 0x00, 0x00]);
//! let result = VM::new(program, VMConfig::default()).unwrap().run().unwrap();
//! let rows = result.dump(869..=869).unwrap();
//! assert_eq!(rows[0].value, 20);
//! ```

pub mod error;
pub mod state;
pub mod memory;
pub mod execute;
pub mod dump;
pub mod vm;

pub use state::VMState;
pub use memory::Memory;
pub use dump::{MemoryRow, DUMP_HEADER};
pub use vm::{VM, VMConfig, ExecutionResult};
pub use error::{Result, RuntimeError};

use std::ops::RangeInclusive;

/// Simple execution helper
///
/// Runs a program on zeroed default memory and dumps the given range.
pub fn run(program: uvm_spec::Program, range: RangeInclusive<usize>) -> Result<Vec<MemoryRow>> {
    VM::new(program, VMConfig::default())?.run()?.dump(range)
}
