//! # UVM Opcode Definitions
//!
//! Four opcodes, each identified by a 3-bit tag in the lowest bits of the
//! instruction's first byte.
//!
//! ## Layout Table
//!
//! ```text
//! Mnemonic  Tag  Bytes  Fields (bits)   Operand roles
//! LOAD      2    6      17, 23          constant, dest
//! WRITE     3    7      23, 23          src, pointer
//! MIN       6    10     23, 23, 23      lhs, rhs, dest
//! READ      7    8      10, 23, 23      offset, base, dest
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of the opcode tag at the start of every instruction
pub const TAG_BITS: u32 = 3;

/// Width of a memory address field
pub const ADDRESS_BITS: u32 = 23;

/// Width of the LOAD constant field
pub const CONSTANT_BITS: u32 = 17;

/// Width of the READ offset field
pub const OFFSET_BITS: u32 = 10;

/// Instruction opcode (3-bit tag)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// LOAD: mem[C] = B
    Load = 2,
    /// WRITE: mem[mem[C]] = mem[B]
    Write = 3,
    /// MIN: mem[D] = min(mem[B], mem[C])
    Min = 6,
    /// READ: mem[D] = mem[mem[C] + B]
    Read = 7,
}

impl Opcode {
    /// All opcodes, in tag order
    pub const ALL: [Opcode; 4] = [Opcode::Load, Opcode::Write, Opcode::Min, Opcode::Read];

    /// Tag value as written in the stream
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Look up an opcode by its tag
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            2 => Some(Opcode::Load),
            3 => Some(Opcode::Write),
            6 => Some(Opcode::Min),
            7 => Some(Opcode::Read),
            _ => None,
        }
    }

    /// Look up an opcode by mnemonic (case-insensitive)
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(name))
    }

    /// Canonical upper-case mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Load => "LOAD",
            Opcode::Write => "WRITE",
            Opcode::Min => "MIN",
            Opcode::Read => "READ",
        }
    }

    /// Encoded instruction length in bytes
    pub const fn encoded_len(self) -> usize {
        match self {
            Opcode::Load => 6,
            Opcode::Write => 7,
            Opcode::Min => 10,
            Opcode::Read => 8,
        }
    }

    /// Operand field widths in encoding order
    pub const fn field_widths(self) -> &'static [u32] {
        match self {
            Opcode::Load => &[CONSTANT_BITS, ADDRESS_BITS],
            Opcode::Write => &[ADDRESS_BITS, ADDRESS_BITS],
            Opcode::Min => &[ADDRESS_BITS, ADDRESS_BITS, ADDRESS_BITS],
            Opcode::Read => &[OFFSET_BITS, ADDRESS_BITS, ADDRESS_BITS],
        }
    }

    /// Operand names in encoding order, used in diagnostics
    pub const fn field_names(self) -> &'static [&'static str] {
        match self {
            Opcode::Load => &["B", "C"],
            Opcode::Write => &["B", "C"],
            Opcode::Min => &["B", "C", "D"],
            Opcode::Read => &["B", "C", "D"],
        }
    }

    /// Number of operand fields after the tag
    #[inline]
    pub const fn field_count(self) -> usize {
        self.field_widths().len()
    }

    /// Bit offset of each operand field, relative to the instruction start
    pub fn field_offsets(self) -> Vec<usize> {
        self.field_widths()
            .iter()
            .scan(TAG_BITS as usize, |pos, &width| {
                let start = *pos;
                *pos += width as usize;
                Some(start)
            })
            .collect()
    }

    /// Total number of meaningful bits (tag plus fields)
    pub fn used_bits(self) -> usize {
        TAG_BITS as usize + self.field_widths().iter().map(|&w| w as usize).sum::<usize>()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::bytes_for_bits;

    #[test]
    fn test_tag_roundtrip() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::from_tag(op.to_u8()), Some(op));
        }
        for tag in [0u8, 1, 4, 5, 8, 0xFF] {
            assert_eq!(Opcode::from_tag(tag), None);
        }
    }

    #[test]
    fn test_tags_fit_tag_field() {
        for op in Opcode::ALL {
            assert!((op.to_u8() as u64) < (1 << TAG_BITS));
        }
    }

    #[test]
    fn test_mnemonic_lookup() {
        assert_eq!(Opcode::from_mnemonic("LOAD"), Some(Opcode::Load));
        assert_eq!(Opcode::from_mnemonic("load"), Some(Opcode::Load));
        assert_eq!(Opcode::from_mnemonic("Min"), Some(Opcode::Min));
        assert_eq!(Opcode::from_mnemonic("JUMP"), None);
    }

    #[test]
    fn test_encoded_len_holds_all_fields() {
        for op in Opcode::ALL {
            assert!(bytes_for_bits(op.used_bits()) <= op.encoded_len());
        }
        assert_eq!(Opcode::Load.used_bits(), 43);
        assert_eq!(Opcode::Write.used_bits(), 49);
        assert_eq!(Opcode::Read.used_bits(), 59);
        assert_eq!(Opcode::Min.used_bits(), 72);
    }

    #[test]
    fn test_field_offsets() {
        assert_eq!(Opcode::Load.field_offsets(), vec![3, 20]);
        assert_eq!(Opcode::Write.field_offsets(), vec![3, 26]);
        assert_eq!(Opcode::Min.field_offsets(), vec![3, 26, 49]);
        assert_eq!(Opcode::Read.field_offsets(), vec![3, 13, 36]);
    }

    #[test]
    fn test_field_names_match_widths() {
        for op in Opcode::ALL {
            assert_eq!(op.field_names().len(), op.field_count());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Opcode::Read.to_string(), "READ");
    }
}
