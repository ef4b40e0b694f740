//! # UVM Disassembler
//!
//! Decode packed UVM instruction streams and render them as text.
//!
//! The decoder here is also what the runtime uses to fetch instructions,
//! so the listing and the executor always agree on what a stream means.
//!
//! ## Example
//!
//! ```rust
//! use uvm_spec::Program;
//! use uvm_disassembler::disassemble;
//!
//! let program = Program::from_bytes(vec![0xA2, 0x00, 0x50, 0x36, 0x00, 0x00]);
//! let asm = disassemble(&program).unwrap();
//! assert!(asm.contains("LOAD 2 20 869"));
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::{disassemble, to_source};
pub use decoder::{decode, decode_program, Decoder};
pub use formatter::{describe, format};
