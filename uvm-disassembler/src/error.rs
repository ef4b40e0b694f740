//! Disassembler errors

use thiserror::Error;
use uvm_spec::RangeError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisassemblerError {
    #[error("Unknown opcode tag {tag} at byte offset {offset}")]
    UnknownOpcodeTag { tag: u8, offset: usize },

    #[error("Truncated program at byte offset {offset}: instruction needs {needed} bytes, {available} available")]
    TruncatedProgram {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Invalid field at byte offset {offset}: {source}")]
    Field {
        offset: usize,
        #[source]
        source: RangeError,
    },
}

impl DisassemblerError {
    /// Byte offset of the instruction that failed to decode
    pub fn offset(&self) -> usize {
        match self {
            DisassemblerError::UnknownOpcodeTag { offset, .. }
            | DisassemblerError::TruncatedProgram { offset, .. }
            | DisassemblerError::Field { offset, .. } => *offset,
        }
    }
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
