//! Instruction execution for UVM

use uvm_spec::{Address, Instruction};
use crate::error::Result;
use crate::memory::Memory;

/// Execute a single instruction located at byte offset `pc`
pub fn execute(instr: &Instruction, memory: &mut Memory, pc: usize) -> Result<()> {
    match *instr {
        // mem[C] = B
        Instruction::Load { constant, dest } => {
            memory.write(dest as Address, constant, pc)?;
        }

        // mem[mem[C]] = mem[B]
        Instruction::Write { src, pointer } => {
            let value = memory.read(src as Address, pc)?;
            let target = memory.read(pointer as Address, pc)?;
            memory.write(target as Address, value, pc)?;
        }

        // mem[D] = min(mem[B], mem[C])
        Instruction::Min { lhs, rhs, dest } => {
            let a = memory.read(lhs as Address, pc)?;
            let b = memory.read(rhs as Address, pc)?;
            memory.write(dest as Address, a.min(b), pc)?;
        }

        // mem[D] = mem[mem[C] + B]
        Instruction::Read { offset, base, dest } => {
            // u32 + u32 always fits in u64
            let address = memory.read(base as Address, pc)? as Address + offset as Address;
            let value = memory.read(address, pc)?;
            memory.write(dest as Address, value, pc)?;
        }
    }

    Ok(())
}
