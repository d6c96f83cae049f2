//! End-to-end tests: compile ELIN source, decode the emitted bytecode,
//! and execute it, checking the reported output.

use elin_common::Program;
use elin_vm::{run, RecordingReporter, Termination};

/// Compile source and execute the result, returning the reported lines.
fn compile_and_run(source: &str) -> Vec<String> {
    let bytecode = elin_compiler::compile(source, "test").expect("source must compile");
    let program = Program::parse(&bytecode).expect("compiled bytecode must decode");
    let mut reporter = RecordingReporter::new();
    let outcome = run(&program, &mut reporter);
    // The compiler guarantees a trailing HALT.
    assert_eq!(outcome, Termination::Halted);
    reporter.lines
}

#[test]
fn assign_and_print() {
    let output = compile_and_run("let x = 10\nprint x\n");
    assert_eq!(output, vec!["10"]);
}

#[test]
fn print_literal() {
    let output = compile_and_run("print 42\n");
    assert_eq!(output, vec!["42"]);
}

#[test]
fn print_negative_literal() {
    let output = compile_and_run("print -13\n");
    assert_eq!(output, vec!["-13"]);
}

#[test]
fn two_term_arithmetic() {
    let output = compile_and_run("let a = 7\nlet b = 5\nlet c = a - b\nprint c\n");
    assert_eq!(output, vec!["2"]);
}

#[test]
fn precedence_multiplication_first() {
    let output = compile_and_run("let x = 2 + 3 * 4\nprint x\n");
    assert_eq!(output, vec!["14"]);
}

#[test]
fn parentheses_override_precedence() {
    let output = compile_and_run("let x = ( 2 + 3 ) * 4\nprint x\n");
    assert_eq!(output, vec!["20"]);
}

#[test]
fn division_truncates() {
    let output = compile_and_run("let x = 10 / 3\nprint x\n");
    assert_eq!(output, vec!["3"]);
}

#[test]
fn subtraction_is_left_associative() {
    let output = compile_and_run("let x = 10 - 4 - 3\nprint x\n");
    assert_eq!(output, vec!["3"]);
}

#[test]
fn mixed_variables_and_literals() {
    let output = compile_and_run(
        "let price = 12\nlet count = 3\nlet total = price * count + 1\nprint total\n",
    );
    assert_eq!(output, vec!["37"]);
}

#[test]
fn reassignment_sees_previous_value() {
    let output = compile_and_run("let x = 1\nlet x = x + 41\nprint x\n");
    assert_eq!(output, vec!["42"]);
}

#[test]
fn statements_after_halt_are_not_executed() {
    let output = compile_and_run("let x = 1\nprint x\nhalt\nprint x\n");
    assert_eq!(output, vec!["1"]);
}

#[test]
fn division_by_zero_is_reported_at_runtime() {
    let output = compile_and_run("let x = 1 / 0\nprint x\n");
    // The quotient is never pushed, so STORE skips, the slot is never
    // allocated, and the later PRINT misses.
    assert_eq!(
        output,
        vec!["Error: Division by zero", "[DEBUG] Variable not found: 0"]
    );
}

#[test]
fn compiled_header_decodes_to_noops() {
    let bytecode = elin_compiler::compile("print 1\n", "pkg").unwrap();
    let program = Program::parse(&bytecode).unwrap();
    assert_eq!(program.len(), program.instruction_count() + 4);
}

#[test]
fn comments_in_source_do_not_reach_the_output_body() {
    let bytecode = elin_compiler::compile("// a comment\nlet x = 1\nprint x\n", "pkg").unwrap();
    // Only the four header lines are comments.
    let comment_lines = bytecode.lines().filter(|l| l.starts_with('#')).count();
    assert_eq!(comment_lines, 4);
}
