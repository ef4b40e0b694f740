//! Instruction decoder

use uvm_spec::encoding::{decode_instruction, extract_tag};
use uvm_spec::{Instruction, Opcode};
use crate::error::{DisassemblerError, Result};

/// Decode the instruction starting at byte `offset` of `stream`
pub fn decode(stream: &[u8], offset: usize) -> Result<Instruction> {
    let first = stream.get(offset).copied().ok_or(DisassemblerError::TruncatedProgram {
        offset,
        needed: 1,
        available: 0,
    })?;

    let tag = extract_tag(first);
    let opcode = Opcode::from_tag(tag).ok_or(DisassemblerError::UnknownOpcodeTag { tag, offset })?;

    let needed = opcode.encoded_len();
    let available = stream.len() - offset;
    if available < needed {
        return Err(DisassemblerError::TruncatedProgram {
            offset,
            needed,
            available,
        });
    }

    decode_instruction(stream, offset, opcode)
        .map_err(|source| DisassemblerError::Field { offset, source })
}

/// Decode a whole stream into `(offset, instruction)` pairs
pub fn decode_program(stream: &[u8]) -> Result<Vec<(usize, Instruction)>> {
    Decoder::new(stream).collect()
}

/// Iterator over the instructions of a stream.
///
/// Yields at most one error, then stops.
pub struct Decoder<'a> {
    stream: &'a [u8],
    offset: usize,
    failed: bool,
}

impl<'a> Decoder<'a> {
    pub fn new(stream: &'a [u8]) -> Self {
        Self {
            stream,
            offset: 0,
            failed: false,
        }
    }

    /// Byte offset of the next instruction
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<(usize, Instruction)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.stream.len() {
            return None;
        }

        let offset = self.offset;
        match decode(self.stream, offset) {
            Ok(instr) => {
                self.offset += instr.encoded_len();
                Some(Ok((offset, instr)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_load() {
        let instr = decode(&[0xA2, 0x00, 0x50, 0x36, 0x00, 0x00], 0).unwrap();
        assert_eq!(instr, Instruction::Load { constant: 20, dest: 869 });
    }

    #[test]
    fn test_decode_read() {
        let instr = decode(&[0x0F, 0x40, 0x6A, 0x00, 0x40, 0x22, 0x00, 0x00], 0).unwrap();
        assert_eq!(instr, Instruction::Read { offset: 1, base: 850, dest: 548 });
    }

    #[test]
    fn test_decode_unknown_tag() {
        assert_eq!(
            decode(&[0x05, 0, 0, 0, 0, 0], 0),
            Err(DisassemblerError::UnknownOpcodeTag { tag: 5, offset: 0 })
        );
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(
            decode(&[0x53, 0x03, 0x00], 0),
            Err(DisassemblerError::TruncatedProgram {
                offset: 0,
                needed: 7,
                available: 3,
            })
        );
    }

    #[test]
    fn test_decode_past_end() {
        assert!(matches!(
            decode(&[0xA2], 1),
            Err(DisassemblerError::TruncatedProgram { offset: 1, .. })
        ));
    }

    #[test]
    fn test_decoder_stops_after_error() {
        let stream = [0xA2, 0x00, 0x50, 0x36, 0x00, 0x00, 0x01, 0xA2];
        let results: Vec<_> = Decoder::new(&stream).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(DisassemblerError::UnknownOpcodeTag { tag: 1, offset: 6 })
        );
    }
}
