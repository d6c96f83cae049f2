//! Statement compilation and bytecode emission.

use crate::error::CompileError;
use crate::expr::{infix_to_postfix, is_operator};
use elin_common::Instr;

/// A named variable slot. Its position in the table is its bytecode index.
struct Variable {
    name: String,
    used: bool,
}

/// Accumulates instructions and the variable table across a compilation.
pub(crate) struct Compiler {
    instructions: Vec<Instr>,
    variables: Vec<Variable>,
}

impl Compiler {
    pub(crate) fn new() -> Self {
        Self {
            instructions: Vec::new(),
            variables: Vec::new(),
        }
    }

    /// Compile one source line. Blank lines and `//`/`#` comments are
    /// skipped.
    pub(crate) fn compile_line(&mut self, line: &str, line_num: usize) -> Result<(), CompileError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with('#') {
            return Ok(());
        }

        let segments: Vec<&str> = trimmed.split_whitespace().collect();
        match segments[0] {
            "let" => self.compile_let(&segments, line_num),
            "print" => self.compile_print(&segments, line_num),
            "halt" => {
                if let Some(extra) = segments.get(1) {
                    return Err(CompileError::UnexpectedToken {
                        line: line_num,
                        token: (*extra).to_string(),
                    });
                }
                self.instructions.push(Instr::Halt);
                Ok(())
            }
            command => Err(CompileError::UnknownStatement {
                line: line_num,
                command: command.to_string(),
            }),
        }
    }

    /// `let <name> = <expr>`: evaluate the expression, store to the
    /// target's slot. The target is defined before the expression
    /// compiles, so reassignment may reference the previous value.
    fn compile_let(&mut self, segments: &[&str], line: usize) -> Result<(), CompileError> {
        if segments.len() < 4 || segments[2] != "=" {
            return Err(CompileError::MalformedLet { line });
        }

        let target = self.define_variable(segments[1]);
        self.compile_expression(&segments[3..], line)?;
        self.instructions.push(Instr::Store { index: target });
        Ok(())
    }

    /// `print <name>` or `print <literal>`. A literal is materialized
    /// through a synthetic slot, since PRINT only reads the table.
    fn compile_print(&mut self, segments: &[&str], line: usize) -> Result<(), CompileError> {
        let token = match segments.get(1) {
            Some(token) => *token,
            None => return Err(CompileError::MalformedPrint { line }),
        };
        if let Some(extra) = segments.get(2) {
            return Err(CompileError::UnexpectedToken {
                line,
                token: (*extra).to_string(),
            });
        }

        let index = if let Ok(value) = token.parse::<i64>() {
            let index = self.define_variable(&format!("__literal_{token}"));
            self.instructions.push(Instr::Push { value });
            self.instructions.push(Instr::Store { index });
            self.variables[index as usize].used = true;
            index
        } else {
            self.use_variable(token, line)?
        };

        self.instructions.push(Instr::Print { index });
        Ok(())
    }

    /// Compile an infix expression to postfix stack code.
    fn compile_expression(&mut self, tokens: &[&str], line: usize) -> Result<(), CompileError> {
        let postfix = infix_to_postfix(tokens, line)?;

        // Track the virtual stack depth so an operator short of operands,
        // or leftover operands, surface here instead of at runtime.
        let mut depth: usize = 0;
        for token in postfix {
            if is_operator(token) {
                if depth < 2 {
                    return Err(CompileError::MalformedExpression { line });
                }
                depth -= 1;
                self.instructions.push(binary_instr(token));
            } else {
                self.compile_operand(token, line)?;
                depth += 1;
            }
        }

        if depth != 1 {
            return Err(CompileError::MalformedExpression { line });
        }
        Ok(())
    }

    /// Emit PUSH for an integer literal, LOAD for a variable reference.
    fn compile_operand(&mut self, token: &str, line: usize) -> Result<(), CompileError> {
        if let Ok(value) = token.parse::<i64>() {
            self.instructions.push(Instr::Push { value });
        } else {
            let index = self.use_variable(token, line)?;
            self.instructions.push(Instr::Load { index });
        }
        Ok(())
    }

    /// Allocate a slot for `name`, or return the existing one.
    fn define_variable(&mut self, name: &str) -> u32 {
        if let Some(pos) = self.variables.iter().position(|v| v.name == name) {
            return pos as u32;
        }
        self.variables.push(Variable {
            name: name.to_string(),
            used: false,
        });
        (self.variables.len() - 1) as u32
    }

    /// Resolve a read of `name`, marking it used.
    fn use_variable(&mut self, name: &str, line: usize) -> Result<u32, CompileError> {
        match self.variables.iter().position(|v| v.name == name) {
            Some(pos) => {
                self.variables[pos].used = true;
                Ok(pos as u32)
            }
            None => Err(CompileError::UndefinedVariable {
                line,
                name: name.to_string(),
            }),
        }
    }

    /// Finish the compilation: append HALT if the program does not end
    /// with one, reject unused variables, and render the output text.
    pub(crate) fn finish(mut self, package: &str) -> Result<String, CompileError> {
        if self.instructions.last() != Some(&Instr::Halt) {
            self.instructions.push(Instr::Halt);
        }

        let unused: Vec<String> = self
            .variables
            .iter()
            .filter(|v| !v.used)
            .map(|v| v.name.clone())
            .collect();
        if !unused.is_empty() {
            return Err(CompileError::UnusedVariables { names: unused });
        }

        let mut lines = Vec::with_capacity(self.instructions.len() + 4);
        lines.push(format!("# Package: {package}"));
        for _ in 0..3 {
            lines.push("#".to_string());
        }
        lines.extend(self.instructions.iter().map(Instr::encode));

        let mut text = lines.join("\n");
        text.push('\n');
        Ok(text)
    }
}

fn binary_instr(op: &str) -> Instr {
    match op {
        "+" => Instr::Add,
        "-" => Instr::Sub,
        "*" => Instr::Mul,
        _ => Instr::Div,
    }
}
