//! Assembler errors
//!
//! Every variant that comes from the source text carries the 1-based line
//! number it was found on.

use thiserror::Error;
use uvm_spec::RangeError;

use crate::parser::Operand;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Unknown instruction at line {line}: {mnemonic}")]
    UnknownInstruction { line: usize, mnemonic: String },

    #[error("Operand count mismatch at line {line}: {mnemonic} expects {expected} operands, found {found}")]
    OperandCountMismatch {
        line: usize,
        mnemonic: String,
        expected: usize,
        found: usize,
    },

    #[error("Opcode mismatch at line {line}: {mnemonic} has opcode {expected}, operand A is {found}")]
    OpcodeMismatch {
        line: usize,
        mnemonic: String,
        expected: u8,
        found: Operand,
    },

    #[error("Operand out of range at line {line}: {mnemonic} operand {operand} = {value} does not fit in {width} bits (max {max})")]
    OperandRangeError {
        line: usize,
        mnemonic: String,
        operand: &'static str,
        value: Operand,
        width: u32,
        max: u64,
    },

    #[error("Encoding failed at line {line}: {source}")]
    Encoding {
        line: usize,
        #[source]
        source: RangeError,
    },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AssemblerError {
    /// Source line the error was reported on, if it came from the program text
    pub fn line(&self) -> Option<usize> {
        match self {
            AssemblerError::SyntaxError { line, .. }
            | AssemblerError::UnknownInstruction { line, .. }
            | AssemblerError::OperandCountMismatch { line, .. }
            | AssemblerError::OpcodeMismatch { line, .. }
            | AssemblerError::OperandRangeError { line, .. }
            | AssemblerError::Encoding { line, .. } => Some(*line),
            AssemblerError::IoError(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_instruction_display() {
        let err = AssemblerError::UnknownInstruction {
            line: 3,
            mnemonic: "JUMP".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown instruction at line 3: JUMP");
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_operand_range_display() {
        let err = AssemblerError::OperandRangeError {
            line: 1,
            mnemonic: "READ".to_string(),
            operand: "B",
            value: Operand::Value(1024),
            width: 10,
            max: 1023,
        };
        assert_eq!(
            err.to_string(),
            "Operand out of range at line 1: READ operand B = 1024 does not fit in 10 bits (max 1023)"
        );
    }

    #[test]
    fn test_oversized_operand_display() {
        let err = AssemblerError::OperandRangeError {
            line: 2,
            mnemonic: "LOAD".to_string(),
            operand: "C",
            value: Operand::Oversized("99999999999999999999999".to_string()),
            width: 23,
            max: 8388607,
        };
        assert_eq!(
            err.to_string(),
            "Operand out of range at line 2: LOAD operand C = 99999999999999999999999 does not fit in 23 bits (max 8388607)"
        );
    }

    #[test]
    fn test_io_error_has_no_line() {
        let err: AssemblerError = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert_eq!(err.line(), None);
    }
}
