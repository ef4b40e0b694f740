//! # UVM Command Line
//!
//! `uvm assemble`, `uvm run` and `uvm disasm` on top of the toolchain
//! crates.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
