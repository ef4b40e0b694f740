//! Flat memory
//!
//! A single linear array of word cells, zero-initialised. Every access is
//! bounds-checked against the configured size before it happens.

use std::ops::RangeInclusive;

use uvm_spec::{Address, Config, Word};

use crate::dump::MemoryRow;
use crate::error::{Result, RuntimeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<Word>,
}

impl Memory {
    /// Zeroed memory with `config.memory_size` cells
    pub fn new(config: &Config) -> Self {
        Memory {
            cells: vec![0; config.memory_size],
        }
    }

    /// Memory preloaded from an image; the image length is the memory size
    pub fn from_cells(cells: Vec<Word>) -> Result<Self> {
        Config::new(cells.len())?;
        Ok(Memory { cells })
    }

    /// Number of cells
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Read a cell. `pc` names the instruction making the access.
    pub fn read(&self, address: Address, pc: usize) -> Result<Word> {
        let index = self.index(address, pc)?;
        Ok(self.cells[index])
    }

    /// Write a cell. `pc` names the instruction making the access.
    pub fn write(&mut self, address: Address, value: Word, pc: usize) -> Result<()> {
        let index = self.index(address, pc)?;
        self.cells[index] = value;
        Ok(())
    }

    fn index(&self, address: Address, pc: usize) -> Result<usize> {
        usize::try_from(address)
            .ok()
            .filter(|&index| index < self.cells.len())
            .ok_or(RuntimeError::AddressOutOfRange {
                address,
                size: self.cells.len(),
                offset: pc,
            })
    }

    /// `(address, value)` rows for an inclusive address range, ascending
    pub fn dump(&self, range: RangeInclusive<usize>) -> Result<Vec<MemoryRow>> {
        let (start, end) = (*range.start(), *range.end());
        if start > end || end >= self.cells.len() {
            return Err(RuntimeError::InvalidDumpRange {
                start,
                end,
                size: self.cells.len(),
            });
        }

        Ok(self.cells[start..=end]
            .iter()
            .zip(start..)
            .map(|(&value, address)| MemoryRow { address, value })
            .collect())
    }

    /// All cells
    pub fn cells(&self) -> &[Word] {
        &self.cells
    }
}
