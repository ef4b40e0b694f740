use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "uvm", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Assemble a source file into a packed binary and a CSV log
    Assemble {
        /// Assembly source
        #[arg(short, long)]
        input: PathBuf,
        /// Binary output
        #[arg(short, long)]
        output: PathBuf,
        /// CSV log of assembled lines
        #[arg(short, long)]
        log: PathBuf,
    },
    /// Execute a binary and dump a memory range to CSV
    Run {
        /// Packed binary
        #[arg(short, long)]
        input: PathBuf,
        /// CSV memory dump
        #[arg(short, long)]
        result: PathBuf,
        /// Inclusive address range to dump
        #[arg(long, num_args = 2, value_names = ["START", "END"], required = true)]
        range: Vec<usize>,
        /// Number of memory cells
        #[arg(long)]
        memory_size: Option<usize>,
        /// Stop with an error after this many instructions (default: no limit)
        #[arg(long)]
        max_cycles: Option<u64>,
        /// Emit a trace event per executed instruction
        #[arg(long)]
        trace: bool,
    },
    /// Print a listing of a binary
    Disasm {
        /// Packed binary
        #[arg(short, long)]
        input: PathBuf,
    },
}
