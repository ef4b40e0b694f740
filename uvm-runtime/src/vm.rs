//! Virtual Machine for UVM

use std::ops::RangeInclusive;

use tracing::{debug, info, trace};
use uvm_disassembler::{decode, format};
use uvm_spec::{Config, Program};

use crate::dump::MemoryRow;
use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::memory::Memory;
use crate::state::VMState;

/// VM configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VMConfig {
    /// Number of memory cells
    pub memory_size: usize,

    /// Maximum number of instructions to execute; `None` runs the whole stream
    pub max_cycles: Option<u64>,

    /// Emit a trace event per executed instruction
    pub trace: bool,
}

impl VMConfig {
    /// Machine configuration implied by this VM configuration
    pub fn machine(&self) -> Result<Config> {
        Ok(Config::new(self.memory_size)?)
    }
}

impl Default for VMConfig {
    fn default() -> Self {
        Self {
            memory_size: Config::DEFAULT.memory_size,
            max_cycles: None,
            trace: false,
        }
    }
}

/// Execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Number of instructions executed
    pub cycles: u64,

    /// Final memory
    pub memory: Memory,
}

impl ExecutionResult {
    /// Final memory contents for an inclusive address range
    pub fn dump(&self, range: RangeInclusive<usize>) -> Result<Vec<MemoryRow>> {
        self.memory.dump(range)
    }
}

/// UVM Virtual Machine
pub struct VM {
    program: Program,
    memory: Memory,
    state: VMState,
    config: VMConfig,
}

impl VM {
    /// Create a VM with zeroed memory
    pub fn new(program: Program, config: VMConfig) -> Result<Self> {
        let memory = Memory::new(&config.machine()?);
        Ok(Self::build(program, memory, config))
    }

    /// Create a VM starting from a preloaded memory image
    pub fn with_memory(program: Program, memory: Memory, config: VMConfig) -> Result<Self> {
        config.machine()?;
        if memory.size() != config.memory_size {
            return Err(RuntimeError::MemorySizeMismatch {
                expected: config.memory_size,
                found: memory.size(),
            });
        }
        Ok(Self::build(program, memory, config))
    }

    fn build(program: Program, memory: Memory, config: VMConfig) -> Self {
        debug!(
            bytes = program.len(),
            memory_size = memory.size(),
            "Loaded program"
        );
        VM {
            program,
            memory,
            state: VMState::new(),
            config,
        }
    }

    /// Execute the whole stream
    pub fn run(mut self) -> Result<ExecutionResult> {
        let len = self.program.len();

        while !self.state.is_done(len) {
            if let Some(limit) = self.config.max_cycles {
                if self.state.cycles >= limit {
                    return Err(RuntimeError::CycleLimitExceeded { limit });
                }
            }

            let pc = self.state.pc;
            let instr = decode(self.program.as_bytes(), pc)?;

            if self.config.trace {
                trace!(pc, cycle = self.state.cycles, instr = %format(&instr), "step");
            }

            execute(&instr, &mut self.memory, pc)?;
            self.state.advance(instr.encoded_len());
        }

        info!(cycles = self.state.cycles, "Execution finished");

        Ok(ExecutionResult {
            cycles: self.state.cycles,
            memory: self.memory,
        })
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &VMState {
        &self.state
    }

    /// Get memory (for debugging)
    pub fn memory(&self) -> &Memory {
        &self.memory
    }
}
