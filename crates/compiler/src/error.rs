//! Error types for the ELIN compiler.

use thiserror::Error;

/// Errors produced while compiling ELIN source to bytecode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A statement's command word is not `let`, `print`, or `halt`.
    #[error("line {line}: unknown statement '{command}'")]
    UnknownStatement { line: usize, command: String },

    /// A variable was used before its defining `let`.
    #[error("line {line}: variable '{name}' used before definition")]
    UndefinedVariable { line: usize, name: String },

    /// A `let` without the `<name> = <expr>` shape.
    #[error("line {line}: malformed let statement")]
    MalformedLet { line: usize },

    /// A `print` without its argument.
    #[error("line {line}: print requires an argument")]
    MalformedPrint { line: usize },

    /// A token appeared where it was not expected.
    #[error("line {line}: unexpected token '{token}'")]
    UnexpectedToken { line: usize, token: String },

    /// An expression with unmatched parentheses.
    #[error("line {line}: unbalanced parentheses")]
    UnbalancedParens { line: usize },

    /// An expression whose operators and operands do not line up.
    #[error("line {line}: malformed expression")]
    MalformedExpression { line: usize },

    /// Variables defined but never read or printed.
    #[error("variables defined but never used: {}", .names.join(", "))]
    UnusedVariables { names: Vec<String> },
}
