//! Dispatch loop for the ELIN interpreter.

use crate::machine::Interpreter;
use crate::reporter::Reporter;
use elin_common::{DecodedLine, Instr, Program};

/// How a run ended.
///
/// These are the only terminal transitions: an explicit HALT or running
/// off the end of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A HALT instruction ended the run early.
    Halted,
    /// Every line was executed.
    EndOfProgram,
}

impl Interpreter {
    /// Execute a program from its first line.
    ///
    /// Lines apply strictly in program order; no instruction can redirect
    /// the cursor. Every fault — lookup miss, stack underflow, division by
    /// zero, unknown opcode — is absorbed at the offending instruction and
    /// reported where the dispatch table calls for it, so `run` has no
    /// error path.
    pub fn run(&mut self, program: &Program, reporter: &mut dyn Reporter) -> Termination {
        for line in &program.lines {
            let instr = match line {
                DecodedLine::NoOp => continue,
                DecodedLine::Instr(instr) => instr,
            };

            match *instr {
                Instr::Push { value } => self.stack.push(value),
                Instr::Load { index } => self.exec_load(index, reporter),
                Instr::Store { index } => self.exec_store(index),
                Instr::Add => self.exec_binary(|a, b| a.wrapping_add(b)),
                Instr::Sub => self.exec_binary(|a, b| a.wrapping_sub(b)),
                Instr::Mul => self.exec_binary(|a, b| a.wrapping_mul(b)),
                Instr::Div => self.exec_div(reporter),
                Instr::Print { index } => self.exec_print(index, reporter),
                Instr::Halt => return Termination::Halted,
                Instr::Unknown { tag } => reporter.debug("Unknown opcode", tag),
            }
        }

        Termination::EndOfProgram
    }

    fn exec_load(&mut self, index: u32, reporter: &mut dyn Reporter) {
        match self.read_var(index) {
            Some(value) => self.stack.push(value),
            None => reporter.debug("Variable not found", i64::from(index)),
        }
    }

    fn exec_store(&mut self, index: u32) {
        // An empty stack means there is nothing to store; the value is
        // silently lost, not defaulted.
        if let Some(value) = self.stack.pop() {
            self.write_var(index, value);
        }
    }

    /// Binary arithmetic: pop two operands, apply, push the result.
    /// Skipped entirely on underflow.
    fn exec_binary(&mut self, op: fn(i64, i64) -> i64) {
        if let Some((a, b)) = self.pop_pair() {
            self.stack.push(op(a, b));
        }
    }

    fn exec_div(&mut self, reporter: &mut dyn Reporter) {
        if let Some((a, b)) = self.pop_pair() {
            if b != 0 {
                self.stack.push(a.wrapping_div(b));
            } else {
                // Both operands are already consumed; nothing is pushed.
                reporter.message("Error: Division by zero");
            }
        }
    }

    fn exec_print(&self, index: u32, reporter: &mut dyn Reporter) {
        match self.read_var(index) {
            Some(value) => reporter.value(value),
            None => reporter.debug("Variable not found", i64::from(index)),
        }
    }
}
