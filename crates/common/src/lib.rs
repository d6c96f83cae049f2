//! ELIN common types and the bytecode line decoder.
//!
//! This crate provides the foundational data structures for the ELIN
//! bytecode format:
//!
//! - [`Opcode`] — the nine instruction tags
//! - [`Instr`] — the decoded instruction, one variant per opcode
//! - [`DecodedLine`] — an instruction or a comment/blank no-op marker
//! - [`Program`] — an ordered sequence of decoded lines
//! - [`DecodeError`] — line-numbered decode failures
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::DecodeError;
pub use instruction::{DecodedLine, Instr};
pub use opcode::Opcode;
pub use program::Program;
