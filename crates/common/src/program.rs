//! Program representation for ELIN bytecode text.
//!
//! A program is the decoded form of a `.outz` file: one [`DecodedLine`] per
//! source line, in source order. Order is execution order; the container is
//! immutable once parsed.

use crate::error::DecodeError;
use crate::instruction::{DecodedLine, Instr};

/// A decoded ELIN program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// One entry per source line, comments and blanks included as no-ops.
    pub lines: Vec<DecodedLine>,
}

impl Program {
    /// Create a program from already decoded lines.
    pub fn new(lines: Vec<DecodedLine>) -> Self {
        Self { lines }
    }

    /// Parse bytecode text into a program.
    ///
    /// Returns the first decode error encountered, with its line number.
    pub fn parse(source: &str) -> Result<Self, DecodeError> {
        let mut lines = Vec::new();
        for (idx, line) in source.lines().enumerate() {
            lines.push(DecodedLine::decode(line, idx + 1)?);
        }
        Ok(Self { lines })
    }

    /// Number of source lines, no-ops included.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the program has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of executable instructions (unknown opcodes included).
    pub fn instruction_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, DecodedLine::Instr(_)))
            .count()
    }

    /// Iterate over the executable instructions in program order.
    pub fn instructions(&self) -> impl Iterator<Item = &Instr> {
        self.lines.iter().filter_map(|line| match line {
            DecodedLine::Instr(instr) => Some(instr),
            DecodedLine::NoOp => None,
        })
    }
}
