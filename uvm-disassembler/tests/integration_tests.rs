//! Integration tests for the UVM disassembler
//!
//! Tests the complete disassembly workflow including:
//! - Instruction decoding from assembled streams
//! - Output formatting
//! - Error handling for corrupt and truncated streams

use uvm_assembler::assemble;
use uvm_disassembler::{decode, decode_program, disassemble, format, to_source, DisassemblerError};
use uvm_spec::{Instruction, Opcode, Program};

// ============================================================================
// Decode Tests
// ============================================================================

#[test]
fn test_decode_every_opcode() {
    let source = "LOAD 2 20 869\nWRITE 3 106 685\nMIN 6 326 197 834\nREAD 7 1 850 548\n";
    let program = assemble(source).unwrap().program;

    let decoded = decode_program(&program.code).unwrap();
    let opcodes: Vec<Opcode> = decoded.iter().map(|(_, i)| i.opcode()).collect();
    assert_eq!(opcodes, Opcode::ALL);

    let offsets: Vec<usize> = decoded.iter().map(|(o, _)| *o).collect();
    assert_eq!(offsets, vec![0, 6, 13, 23]);
}

#[test]
fn test_decode_max_operands() {
    let source = "READ 7 1023 8388607 8388607";
    let program = assemble(source).unwrap().program;
    assert_eq!(
        decode(&program.code, 0).unwrap(),
        Instruction::Read {
            offset: 1023,
            base: 8388607,
            dest: 8388607,
        }
    );
}

// ============================================================================
// Corrupt Streams
// ============================================================================

#[test]
fn test_unknown_tag_reports_offset() {
    let mut code = assemble("LOAD 2 1 2").unwrap().program.code;
    code.extend([0x04, 0, 0, 0, 0, 0]);

    assert_eq!(
        decode_program(&code),
        Err(DisassemblerError::UnknownOpcodeTag { tag: 4, offset: 6 })
    );
}

#[test]
fn test_every_unassigned_tag_is_rejected() {
    for tag in [0u8, 1, 4, 5] {
        let err = decode(&[tag; 10], 0).unwrap_err();
        assert_eq!(err, DisassemblerError::UnknownOpcodeTag { tag, offset: 0 });
    }
}

#[test]
fn test_truncated_tail() {
    let mut code = assemble("MIN 6 1 2 3").unwrap().program.code;
    code.truncate(9);

    match decode_program(&code) {
        Err(DisassemblerError::TruncatedProgram { offset, needed, available }) => {
            assert_eq!(offset, 0);
            assert_eq!(needed, 10);
            assert_eq!(available, 9);
        }
        other => panic!("Expected TruncatedProgram, got {:?}", other),
    }
}

#[test]
fn test_truncated_second_instruction() {
    let mut code = assemble("LOAD 2 1 2\nREAD 7 1 2 3").unwrap().program.code;
    code.pop();

    let err = decode_program(&code).unwrap_err();
    assert_eq!(err.offset(), 6);
}

// ============================================================================
// Listing
// ============================================================================

#[test]
fn test_listing_roundtrips_through_assembler() {
    let source = "LOAD 2 5 100\nWRITE 3 100 101\nMIN 6 100 101 102\nREAD 7 3 101 103\n";
    let program = assemble(source).unwrap().program;

    assert_eq!(to_source(&program).unwrap(), source);
    let reassembled = assemble(&to_source(&program).unwrap()).unwrap().program;
    assert_eq!(reassembled, program);
}

#[test]
fn test_listing_contains_descriptions() {
    let program = assemble("READ 7 1 850 548").unwrap().program;
    let asm = disassemble(&program).unwrap();
    assert!(asm.contains("0F 40 6A 00 40 22 00 00"));
    assert!(asm.contains("mem[548] = mem[mem[850] + 1]"));
}

#[test]
fn test_format_matches_source_syntax() {
    let instr = Instruction::Min { lhs: 1, rhs: 2, dest: 3 };
    assert_eq!(format(&instr), "MIN 6 1 2 3");
}

#[test]
fn test_disassemble_empty_program() {
    assert!(disassemble(&Program::new()).unwrap().contains("0 instructions"));
}
