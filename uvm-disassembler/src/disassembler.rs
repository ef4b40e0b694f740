//! Main disassembler logic

use uvm_spec::{hex_bytes, Program};
use crate::decoder::Decoder;
use crate::error::Result;
use crate::formatter::{describe, format};

/// Disassemble a program into an annotated listing.
///
/// Stops at the first instruction that fails to decode.
pub fn disassemble(program: &Program) -> Result<String> {
    let mut output = String::new();
    let mut count = 0usize;
    let mut body = String::new();

    for decoded in Decoder::new(&program.code) {
        let (offset, instr) = decoded?;
        let bytes = &program.code[offset..offset + instr.encoded_len()];

        body.push_str(&format!(
            "0x{:04X}:  {:<29}  {:<24}; {}\n",
            offset,
            hex_bytes(bytes),
            format(&instr),
            describe(&instr)
        ));
        count += 1;
    }

    output.push_str("; UVM Disassembly\n");
    output.push_str(&format!("; {} bytes ({} instructions)\n", program.len(), count));
    output.push('\n');
    output.push_str(&body);

    Ok(output)
}

/// Disassemble to re-assemblable source, one instruction per line
pub fn to_source(program: &Program) -> Result<String> {
    let mut output = String::new();
    for decoded in Decoder::new(&program.code) {
        let (_, instr) = decoded?;
        output.push_str(&format(&instr));
        output.push('\n');
    }
    Ok(output)
}
