//! UVM Assembler
//!
//! Assemble UVM assembly text into a packed instruction stream plus an
//! audit log.
//!
//! ## Example
//!
//! ```rust
//! use uvm_assembler::assemble;
//!
//! let source = r#"
//!     LOAD 2 20 869    # mem[869] = 20
//!     MIN 6 869 869 870
//! "#;
//!
//! let assembly = assemble(source).unwrap();
//! assert_eq!(assembly.program.len(), 16);
//! assert_eq!(assembly.log.len(), 2);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod encoder;
pub mod log;
pub mod assembler;

pub use error::{AssemblerError, Result};
pub use assembler::{assemble, assemble_file, Assembly};
pub use parser::{parse_instruction, parse_line, Operand, SourceLine};
pub use encoder::{encode, encode_all};
pub use log::{LogEntry, LOG_HEADER};
