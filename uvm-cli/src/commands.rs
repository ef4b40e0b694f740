//! Subcommand implementations
//!
//! Each command does its whole transform in memory before touching its
//! outputs, so a failure never leaves a partial artifact behind.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;
use uvm_runtime::{MemoryRow, VMConfig, VM};
use uvm_spec::Program;

use crate::output::{commit_all, stage, write_atomic};

/// Assemble `input`, writing the binary to `output` and the log to `log`
pub fn assemble(input: &Path, output: &Path, log: &Path) -> Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let assembly = uvm_assembler::assemble(&source)
        .with_context(|| format!("Failed to assemble {}", input.display()))?;

    commit_all(vec![
        stage(output, assembly.program.as_bytes())?,
        stage(log, assembly.log_csv().as_bytes())?,
    ])?;

    info!(
        input = %input.display(),
        bytes = assembly.program.len(),
        instructions = assembly.log.len(),
        "Wrote binary and log"
    );
    Ok(())
}

/// Execute `input` and write the dump of `start..=end` to `result`
pub fn run(input: &Path, result: &Path, range: &[usize], config: VMConfig) -> Result<Vec<MemoryRow>> {
    let [start, end] = range[..] else {
        bail!("--range takes exactly two addresses, got {}", range.len());
    };

    let program = load(input)?;
    let rows = VM::new(program, config)
        .and_then(VM::run)
        .and_then(|executed| executed.dump(start..=end))
        .with_context(|| format!("Failed to execute {}", input.display()))?;

    write_atomic(result, MemoryRow::to_csv(&rows).as_bytes())?;

    info!(input = %input.display(), rows = rows.len(), "Wrote memory dump");
    Ok(rows)
}

/// Render the listing of `input`
pub fn disasm(input: &Path) -> Result<String> {
    let program = load(input)?;
    uvm_disassembler::disassemble(&program)
        .with_context(|| format!("Failed to disassemble {}", input.display()))
}

fn load(input: &Path) -> Result<Program> {
    Program::load(input).with_context(|| format!("Failed to read {}", input.display()))
}

/// Build a VM configuration from command line overrides
pub fn vm_config(memory_size: Option<usize>, max_cycles: Option<u64>, trace: bool) -> VMConfig {
    let defaults = VMConfig::default();
    VMConfig {
        memory_size: memory_size.unwrap_or(defaults.memory_size),
        max_cycles,
        trace,
    }
}
