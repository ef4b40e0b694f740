//! Assembly parser
//!
//! One instruction per line: a mnemonic followed by whitespace-separated
//! unsigned operands. The first operand (`A`) repeats the opcode number,
//! the rest (`B`, `C`, `D`) fill the instruction's fields:
//!
//! ```text
//! LOAD  2 <constant> <dest>
//! WRITE 3 <src> <pointer>
//! MIN   6 <lhs> <rhs> <dest>
//! READ  7 <offset> <base> <dest>
//! ```

use logos::Logos;
use std::fmt;
use uvm_spec::bits::{fits, max_value};
use uvm_spec::{Instruction, Opcode};

use crate::error::{AssemblerError, Result};
use crate::lexer::{is_integer_literal, Token};

/// A numeric operand as written on a source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Value(u64),
    /// Well-formed literal too large for `u64`, kept as written
    Oversized(String),
}

impl Operand {
    /// The operand's value, if it fits in `u64`
    pub fn value(&self) -> Option<u64> {
        match self {
            Operand::Value(value) => Some(*value),
            Operand::Oversized(_) => None,
        }
    }

    /// Value of the operand if it fits in `width` bits
    pub fn fitting(&self, width: u32) -> Option<u64> {
        self.value().filter(|&value| fits(value, width))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Value(value) => write!(f, "{}", value),
            Operand::Oversized(text) => f.write_str(text),
        }
    }
}

/// A lexed, not yet validated source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number
    pub line: usize,
    pub mnemonic: String,
    pub operands: Vec<Operand>,
}

/// Split a source line into mnemonic and operands.
///
/// Returns `Ok(None)` for blank and comment-only lines.
pub fn parse_line(line: usize, text: &str) -> Result<Option<SourceLine>> {
    let mut lexer = Token::lexer(text).spanned();

    let mnemonic = match lexer.next() {
        None => return Ok(None),
        Some((Ok(Token::Identifier(name)), _)) => name,
        Some((Ok(Token::Newline), _)) => return Ok(None),
        Some((_, span)) => {
            return Err(AssemblerError::SyntaxError {
                line,
                column: span.start + 1,
                message: format!("expected instruction mnemonic, found `{}`", &text[span]),
            });
        }
    };

    let mut operands = Vec::new();
    for (token, span) in lexer {
        match token.as_ref().ok().and_then(Token::as_number) {
            Some(value) => operands.push(Operand::Value(value)),
            None if token == Ok(Token::Newline) => break,
            None if token.is_err() && is_integer_literal(&text[span.clone()]) => {
                operands.push(Operand::Oversized(text[span].to_string()));
            }
            None => {
                return Err(AssemblerError::SyntaxError {
                    line,
                    column: span.start + 1,
                    message: format!("expected non-negative integer operand, found `{}`", &text[span]),
                });
            }
        }
    }

    Ok(Some(SourceLine {
        line,
        mnemonic,
        operands,
    }))
}

/// Validate a source line and build the instruction it names.
///
/// Checks run in a fixed order: mnemonic, operand count, opcode operand,
/// then each field's range.
pub fn parse_instruction(source: &SourceLine) -> Result<Instruction> {
    let line = source.line;

    let opcode = Opcode::from_mnemonic(&source.mnemonic).ok_or_else(|| {
        AssemblerError::UnknownInstruction {
            line,
            mnemonic: source.mnemonic.clone(),
        }
    })?;
    let mnemonic = opcode.mnemonic().to_string();

    let expected = opcode.field_count() + 1;
    if source.operands.len() != expected {
        return Err(AssemblerError::OperandCountMismatch {
            line,
            mnemonic,
            expected,
            found: source.operands.len(),
        });
    }

    let tag = &source.operands[0];
    if tag.value() != Some(opcode.to_u8() as u64) {
        return Err(AssemblerError::OpcodeMismatch {
            line,
            mnemonic,
            expected: opcode.to_u8(),
            found: tag.clone(),
        });
    }

    let fields = &source.operands[1..];
    let widths = opcode.field_widths();
    let names = opcode.field_names();
    let mut values = Vec::with_capacity(fields.len());

    for ((operand, &width), &name) in fields.iter().zip(widths).zip(names) {
        let Some(value) = operand.fitting(width) else {
            return Err(AssemblerError::OperandRangeError {
                line,
                mnemonic,
                operand: name,
                value: operand.clone(),
                width,
                max: max_value(width),
            });
        };
        // Widths never exceed 23 bits
        values.push(value as u32);
    }

    Instruction::from_fields(opcode, &values).ok_or(AssemblerError::OperandCountMismatch {
        line,
        mnemonic,
        expected,
        found: source.operands.len(),
    })
}
