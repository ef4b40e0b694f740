//! Main assembler logic

use std::path::Path;
use tracing::{debug, info};
use uvm_spec::{hex_bytes, Program};

use crate::encoder::encode;
use crate::error::{AssemblerError, Result};
use crate::log::LogEntry;
use crate::parser::{parse_instruction, parse_line};

/// Output of a successful assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// Packed instruction stream
    pub program: Program,
    /// One entry per assembled line, in source order
    pub log: Vec<LogEntry>,
}

impl Assembly {
    /// Audit log rendered as CSV
    pub fn log_csv(&self) -> String {
        LogEntry::to_csv(&self.log)
    }
}

/// Assemble source code into a program and its audit log.
///
/// The first error aborts the whole assembly; no partial output is returned.
pub fn assemble(source: &str) -> Result<Assembly> {
    let mut program = Program::new();
    let mut log = Vec::new();

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;

        let Some(parsed) = parse_line(line, text)? else {
            continue;
        };

        let instr = parse_instruction(&parsed)?;
        let bytes = encode(&instr).map_err(|source| AssemblerError::Encoding { line, source })?;
        debug!(line, ?instr, bytes = %hex_bytes(&bytes), "assembled");

        program.push(&bytes);
        log.push(LogEntry::from(&instr));
    }

    info!(instructions = log.len(), bytes = program.len(), "assembly complete");
    Ok(Assembly { program, log })
}

/// Read a source file from disk and assemble it
pub fn assemble_file(path: impl AsRef<Path>) -> Result<Assembly> {
    let source = std::fs::read_to_string(path)?;
    assemble(&source)
}
