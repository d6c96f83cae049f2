//! Infix expression handling for `let` statements.
//!
//! Expressions arrive pre-tokenized (whitespace-separated) and are
//! converted to postfix with the shunting-yard algorithm. The stack
//! machine then evaluates postfix directly: operands push, operators pop
//! two and push one.

use crate::error::CompileError;

/// Returns true for the four binary arithmetic operators.
pub(crate) fn is_operator(token: &str) -> bool {
    matches!(token, "+" | "-" | "*" | "/")
}

/// Operator precedence: `*` and `/` bind tighter than `+` and `-`.
fn precedence(op: &str) -> u8 {
    match op {
        "+" | "-" => 1,
        "*" | "/" => 2,
        _ => 0,
    }
}

/// Convert an infix token sequence to postfix order.
///
/// Equal precedence resolves left to right. Parentheses group; an
/// unmatched one on either side is an error.
pub(crate) fn infix_to_postfix<'a>(
    tokens: &[&'a str],
    line: usize,
) -> Result<Vec<&'a str>, CompileError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<&str> = Vec::new();

    for &token in tokens {
        match token {
            "(" => operators.push(token),
            ")" => loop {
                match operators.pop() {
                    Some("(") => break,
                    Some(op) => output.push(op),
                    None => return Err(CompileError::UnbalancedParens { line }),
                }
            },
            _ if is_operator(token) => {
                while let Some(&top) = operators.last() {
                    if is_operator(top) && precedence(top) >= precedence(token) {
                        output.push(top);
                        operators.pop();
                    } else {
                        break;
                    }
                }
                operators.push(token);
            }
            _ => output.push(token),
        }
    }

    while let Some(op) = operators.pop() {
        if op == "(" {
            return Err(CompileError::UnbalancedParens { line });
        }
        output.push(op);
    }

    Ok(output)
}
