//! Instruction encoding to packed byte records
//!
//! Each instruction becomes exactly `opcode.encoded_len()` bytes; records
//! are concatenated with no padding between them.

use uvm_spec::encoding::encode_instruction;
use uvm_spec::{Instruction, Program, RangeError};

/// Encode one instruction to its fixed-length record
pub fn encode(instr: &Instruction) -> Result<Vec<u8>, RangeError> {
    let bytes = encode_instruction(instr)?;
    debug_assert_eq!(bytes.len(), instr.encoded_len());
    Ok(bytes)
}

/// Encode a sequence of instructions into one program
pub fn encode_all<'a, I>(instrs: I) -> Result<Program, RangeError>
where
    I: IntoIterator<Item = &'a Instruction>,
{
    let mut program = Program::new();
    for instr in instrs {
        program.push(&encode(instr)?);
    }
    Ok(program)
}
