//! Decode errors for ELIN bytecode text.

use thiserror::Error;

/// Errors produced while decoding bytecode text into instructions.
///
/// Every variant carries the 1-based source line number. An unrecognized
/// opcode tag is deliberately not represented here: it decodes to
/// [`Instr::Unknown`](crate::Instr::Unknown) so the interpreter can report
/// it at execution time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A token could not be parsed as a decimal integer.
    #[error("line {line}: invalid integer '{token}'")]
    InvalidToken { line: usize, token: String },

    /// An instruction line had fewer operand tokens than its opcode requires.
    #[error("line {line}: {opcode} expects {expected} operand(s)")]
    MissingOperand {
        line: usize,
        opcode: &'static str,
        expected: usize,
    },

    /// An instruction line had tokens beyond its opcode's layout.
    #[error("line {line}: unexpected token '{token}'")]
    UnexpectedToken { line: usize, token: String },

    /// A variable index operand was negative or out of the index range.
    #[error("line {line}: invalid variable index {index}")]
    InvalidIndex { line: usize, index: i64 },
}
