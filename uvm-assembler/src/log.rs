//! Assembly audit log
//!
//! One entry per accepted source line, in source order. Serialized as CSV
//! with the header `command,opcode,operands`; the operand list is written
//! as further comma-separated columns.

use serde::{Deserialize, Serialize};
use std::fmt::Write;
use uvm_spec::Instruction;

/// CSV header for the audit log
pub const LOG_HEADER: &str = "command,opcode,operands";

/// Audit record for one assembled instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Canonical upper-case mnemonic
    pub command: String,
    /// Opcode number
    pub opcode: u8,
    /// Every operand written on the source line, including `A`
    pub operands: Vec<u64>,
}

impl From<&Instruction> for LogEntry {
    /// Operand `A` always equals the opcode once a line has assembled
    fn from(instr: &Instruction) -> Self {
        let opcode = instr.opcode();
        let operands = std::iter::once(opcode.to_u8() as u64)
            .chain(instr.fields().into_iter().map(u64::from))
            .collect();
        LogEntry {
            command: opcode.mnemonic().to_string(),
            opcode: opcode.to_u8(),
            operands,
        }
    }
}

impl LogEntry {
    /// Render this entry as one CSV row (without trailing newline)
    pub fn to_csv_row(&self) -> String {
        let mut row = format!("{},{}", self.command, self.opcode);
        for operand in &self.operands {
            // Writing into a String cannot fail
            let _ = write!(row, ",{}", operand);
        }
        row
    }

    /// Render a complete log, header included
    pub fn to_csv(entries: &[LogEntry]) -> String {
        let mut out = String::from(LOG_HEADER);
        out.push('\n');
        for entry in entries {
            out.push_str(&entry.to_csv_row());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_row() {
        let entry = LogEntry {
            command: "LOAD".to_string(),
            opcode: 2,
            operands: vec![2, 20, 869],
        };
        assert_eq!(entry.to_csv_row(), "LOAD,2,2,20,869");
    }

    #[test]
    fn test_csv_document() {
        let entries = vec![
            LogEntry {
                command: "LOAD".to_string(),
                opcode: 2,
                operands: vec![2, 20, 869],
            },
            LogEntry {
                command: "MIN".to_string(),
                opcode: 6,
                operands: vec![6, 326, 197, 834],
            },
        ];
        assert_eq!(
            LogEntry::to_csv(&entries),
            "command,opcode,operands\nLOAD,2,2,20,869\nMIN,6,6,326,197,834\n"
        );
    }

    #[test]
    fn test_empty_log_has_header() {
        assert_eq!(LogEntry::to_csv(&[]), "command,opcode,operands\n");
    }

    #[test]
    fn test_from_instruction() {
        let entry = LogEntry::from(&Instruction::Read { offset: 1, base: 850, dest: 548 });
        assert_eq!(entry.to_csv_row(), "READ,7,7,1,850,548");
    }
}
