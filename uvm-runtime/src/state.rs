//! VM state

/// Execution cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VMState {
    /// Byte offset of the next instruction
    pub pc: usize,

    /// Instructions executed so far
    pub cycles: u64,
}

impl VMState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step past an instruction of `len` bytes
    #[inline]
    pub fn advance(&mut self, len: usize) {
        self.pc += len;
        self.cycles += 1;
    }

    /// Whether the cursor has reached the end of a stream of `len` bytes
    #[inline]
    pub fn is_done(&self, len: usize) -> bool {
        self.pc >= len
    }
}
