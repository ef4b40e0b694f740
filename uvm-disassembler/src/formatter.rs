//! Instruction formatting to assembly text
//!
//! Output re-assembles to the same bytes: the mnemonic, the opcode as
//! operand `A`, then the fields in encoding order.

use uvm_spec::Instruction;

/// Format instruction as assembly text
pub fn format(instr: &Instruction) -> String {
    let opcode = instr.opcode();
    let mut text = format!("{} {}", opcode.mnemonic(), opcode.to_u8());
    for field in instr.fields() {
        text.push(' ');
        text.push_str(&field.to_string());
    }
    text
}

/// Human-readable description of what an instruction does
pub fn describe(instr: &Instruction) -> String {
    match *instr {
        Instruction::Load { constant, dest } => format!("mem[{}] = {}", dest, constant),
        Instruction::Write { src, pointer } => format!("mem[mem[{}]] = mem[{}]", pointer, src),
        Instruction::Min { lhs, rhs, dest } => {
            format!("mem[{}] = min(mem[{}], mem[{}])", dest, lhs, rhs)
        }
        Instruction::Read { offset, base, dest } => {
            format!("mem[{}] = mem[mem[{}] + {}]", dest, base, offset)
        }
    }
}
