//! UVM Instruction Set
//!
//! Four instruction shapes. Operand letters follow the assembly syntax,
//! where operand `A` is the opcode itself and `B`, `C`, `D` are the fields.

use crate::opcode::Opcode;
use serde::{Deserialize, Serialize};

/// UVM instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// LOAD: mem[dest] = constant
    Load { constant: u32, dest: u32 },

    /// WRITE: mem[mem[pointer]] = mem[src]
    Write { src: u32, pointer: u32 },

    /// MIN: mem[dest] = min(mem[lhs], mem[rhs])
    Min { lhs: u32, rhs: u32, dest: u32 },

    /// READ: mem[dest] = mem[mem[base] + offset]
    Read { offset: u32, base: u32, dest: u32 },
}

impl Instruction {
    pub const fn opcode(&self) -> Opcode {
        match self {
            Instruction::Load { .. } => Opcode::Load,
            Instruction::Write { .. } => Opcode::Write,
            Instruction::Min { .. } => Opcode::Min,
            Instruction::Read { .. } => Opcode::Read,
        }
    }

    /// Field values in encoding order (`B`, `C`[, `D`])
    pub fn fields(&self) -> Vec<u32> {
        match *self {
            Instruction::Load { constant, dest } => vec![constant, dest],
            Instruction::Write { src, pointer } => vec![src, pointer],
            Instruction::Min { lhs, rhs, dest } => vec![lhs, rhs, dest],
            Instruction::Read { offset, base, dest } => vec![offset, base, dest],
        }
    }

    /// Build an instruction from field values in encoding order.
    ///
    /// Returns `None` if the number of fields does not match the opcode.
    pub fn from_fields(opcode: Opcode, fields: &[u32]) -> Option<Self> {
        let instr = match (opcode, fields) {
            (Opcode::Load, &[constant, dest]) => Instruction::Load { constant, dest },
            (Opcode::Write, &[src, pointer]) => Instruction::Write { src, pointer },
            (Opcode::Min, &[lhs, rhs, dest]) => Instruction::Min { lhs, rhs, dest },
            (Opcode::Read, &[offset, base, dest]) => Instruction::Read { offset, base, dest },
            _ => return None,
        };
        Some(instr)
    }

    /// Encoded length in bytes
    #[inline]
    pub const fn encoded_len(&self) -> usize {
        self.opcode().encoded_len()
    }
}
