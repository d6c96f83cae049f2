//! ELIN compiler — translates ELIN source into bytecode text.
//!
//! The source language is line-oriented:
//!
//! - `let <name> = <expr>` — define or reassign a variable. `<expr>` is a
//!   whitespace-separated infix expression over integer literals and
//!   already-defined variables, with `+ - * /`, parentheses, and the
//!   usual precedence.
//! - `print <name>` / `print <literal>` — report a value.
//! - `halt` — stop the program.
//! - Blank lines and lines starting with `//` or `#` are ignored.
//!
//! The output is the text the interpreter consumes: a four-line package
//! header followed by one instruction per line. A HALT is appended when
//! the source does not end with one, and variables that are defined but
//! never read are rejected.
//!
//! # Usage
//!
//! ```
//! let bytecode = elin_compiler::compile("let x = 2 + 3\nprint x\n", "demo").unwrap();
//! assert!(bytecode.starts_with("# Package: demo\n"));
//! assert!(bytecode.ends_with("9\n"));
//! ```

pub mod error;

mod codegen;
mod expr;

pub use error::CompileError;

use codegen::Compiler;

/// Compile ELIN source to bytecode text.
///
/// `package` names the program in the output header; the CLI passes the
/// source file stem. Returns the first error encountered.
pub fn compile(source: &str, package: &str) -> Result<String, CompileError> {
    let mut compiler = Compiler::new();
    for (idx, line) in source.lines().enumerate() {
        compiler.compile_line(line, idx + 1)?;
    }
    compiler.finish(package)
}
