//! # Program Structure for UVM
//!
//! A program is the raw instruction stream: encoded instructions
//! concatenated back to back, with no header, footer or padding between
//! them.

use crate::error::UvmError;
use std::fmt;
use std::path::Path;

/// Complete UVM program
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Instruction stream bytes
    pub code: Vec<u8>,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self { code: Vec::new() }
    }

    /// Wrap an existing instruction stream
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self { code: bytes.into() }
    }

    /// Read an instruction stream from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, UvmError> {
        Ok(Self::from_bytes(std::fs::read(path)?))
    }

    /// Append one encoded instruction
    pub fn push(&mut self, encoded: &[u8]) {
        self.code.extend_from_slice(encoded);
    }

    /// Serialized stream (identical to `code`)
    pub fn to_bytes(&self) -> Vec<u8> {
        self.code.clone()
    }

    /// Stream length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }
}

impl AsRef<[u8]> for Program {
    fn as_ref(&self) -> &[u8] {
        &self.code
    }
}

impl From<Vec<u8>> for Program {
    fn from(code: Vec<u8>) -> Self {
        Self { code }
    }
}

/// Space-separated upper-case hex, e.g. `A2 00 50 36 00 00`
pub fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UVM Program ({} bytes)", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_program_is_empty() {
        let program = Program::new();
        assert!(program.is_empty());
        assert_eq!(program.len(), 0);
    }

    #[test]
    fn test_push_concatenates_without_padding() {
        let mut program = Program::new();
        program.push(&[0xA2, 0x00, 0x50, 0x36, 0x00, 0x00]);
        program.push(&[0x53, 0x03, 0x00, 0xB4, 0x0A, 0x00, 0x00]);
        assert_eq!(program.len(), 13);
        assert_eq!(program.code[6], 0x53);
        assert_eq!(program.to_bytes(), program.as_bytes());
    }

    #[test]
    fn test_hex_bytes() {
        assert_eq!(hex_bytes(&[0xA2, 0x00, 0x5]), "A2 00 05");
        assert_eq!(hex_bytes(&[]), "");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Program::load("/nonexistent/uvm/program.bin").unwrap_err();
        assert!(matches!(err, UvmError::IoError(_)));
    }

    #[test]
    fn test_display() {
        let program = Program::from_bytes(vec![0u8; 6]);
        assert_eq!(program.to_string(), "UVM Program (6 bytes)");
    }
}
