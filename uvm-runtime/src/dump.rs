//! Memory dump rows
//!
//! Serialized as CSV with the header `Address,Value`, one row per address.

use serde::{Deserialize, Serialize};
use uvm_spec::Word;

/// CSV header for a memory dump
pub const DUMP_HEADER: &str = "Address,Value";

/// One memory cell in a dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRow {
    pub address: usize,
    pub value: Word,
}

impl MemoryRow {
    /// Render this row as `address,value` (without trailing newline)
    pub fn to_csv_row(&self) -> String {
        format!("{},{}", self.address, self.value)
    }

    /// Render a complete dump, header included
    pub fn to_csv(rows: &[MemoryRow]) -> String {
        let mut out = String::from(DUMP_HEADER);
        out.push('\n');
        for row in rows {
            out.push_str(&row.to_csv_row());
            out.push('\n');
        }
        out
    }
}
