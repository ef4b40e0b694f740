//! # Instruction Layout Helpers
//!
//! Shared by the assembler (encode) and the disassembler (decode). Both go
//! through [`crate::bits`] so the layout is defined in exactly one place.
//!
//! ## Instruction Format
//!
//! ```text
//! LOAD:  [tag:3][B:17][C:23]            -> 6 bytes
//! WRITE: [tag:3][B:23][C:23]            -> 7 bytes
//! READ:  [tag:3][B:10][C:23][D:23]      -> 8 bytes
//! MIN:   [tag:3][B:23][C:23][D:23]      -> 10 bytes (last byte zero)
//! ```
//!
//! Fields are listed from the lowest stream bit upwards.

use crate::bits::{pack, unpack, RangeError};
use crate::instruction::Instruction;
use crate::opcode::{Opcode, TAG_BITS};

/// Mask selecting the tag bits of an instruction's first byte
pub const TAG_MASK: u8 = (1 << TAG_BITS) - 1;

/// Extract the opcode tag from an instruction's first byte
#[inline]
pub const fn extract_tag(first_byte: u8) -> u8 {
    first_byte & TAG_MASK
}

/// Encode a typed instruction into `encoded_len()` bytes.
///
/// Fails if a field value does not fit its declared width.
pub fn encode_instruction(instr: &Instruction) -> Result<Vec<u8>, RangeError> {
    let opcode = instr.opcode();
    let mut buf = vec![0u8; opcode.encoded_len()];

    pack(&mut buf, 0, TAG_BITS, opcode.to_u8() as u64)?;

    let mut pos = TAG_BITS as usize;
    for (&width, value) in opcode.field_widths().iter().zip(instr.fields()) {
        pack(&mut buf, pos, width, value as u64)?;
        pos += width as usize;
    }

    Ok(buf)
}

/// Decode the raw field values of `opcode` from `stream`, starting at byte `offset`
pub fn decode_fields(stream: &[u8], offset: usize, opcode: Opcode) -> Result<Vec<u64>, RangeError> {
    let mut pos = offset * 8 + TAG_BITS as usize;
    opcode
        .field_widths()
        .iter()
        .map(|&width| {
            let value = unpack(stream, pos, width);
            pos += width as usize;
            value
        })
        .collect()
}

/// Decode a typed instruction of known `opcode` at byte `offset`
pub fn decode_instruction(stream: &[u8], offset: usize, opcode: Opcode) -> Result<Instruction, RangeError> {
    let fields = decode_fields(stream, offset, opcode)?;
    // Fields are at most 23 bits wide
    let f = |i: usize| fields[i] as u32;

    Ok(match opcode {
        Opcode::Load => Instruction::Load { constant: f(0), dest: f(1) },
        Opcode::Write => Instruction::Write { src: f(0), pointer: f(1) },
        Opcode::Min => Instruction::Min { lhs: f(0), rhs: f(1), dest: f(2) },
        Opcode::Read => Instruction::Read { offset: f(0), base: f(1), dest: f(2) },
    })
}
