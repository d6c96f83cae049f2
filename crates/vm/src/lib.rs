//! ELIN interpreter — executes decoded bytecode programs.
//!
//! The interpreter is a stack machine with:
//! - An evaluation stack for intermediate values
//! - A dense, growable variable table indexed by slot number
//! - A [`Reporter`] capability for all output
//!
//! Faults (missing variables, stack underflow, division by zero, unknown
//! opcodes) never abort a run: each is absorbed at the offending
//! instruction, reported where the instruction set calls for it, and
//! execution continues. Only HALT or the end of the program stops it.
//!
//! # Usage
//!
//! ```
//! use elin_common::Program;
//! use elin_vm::{run, RecordingReporter, Termination};
//!
//! let program = Program::parse("1 0 0 0 42\n3 0\n8 0\n9\n").unwrap();
//!
//! let mut reporter = RecordingReporter::new();
//! let outcome = run(&program, &mut reporter);
//! assert_eq!(outcome, Termination::Halted);
//! assert_eq!(reporter.lines, vec!["42"]);
//! ```

pub mod execute;
pub mod machine;
pub mod reporter;

pub use execute::Termination;
pub use machine::Interpreter;
pub use reporter::{ConsoleReporter, RecordingReporter, Reporter};

use elin_common::Program;

/// Execute a program on a fresh interpreter.
///
/// This is the primary entry point for one-shot execution. Callers that
/// need to inspect the final state, or to dump it, construct an
/// [`Interpreter`] themselves and call [`Interpreter::run`].
pub fn run(program: &Program, reporter: &mut dyn Reporter) -> Termination {
    let mut interp = Interpreter::new();
    interp.run(program, reporter)
}
