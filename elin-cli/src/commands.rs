//! CLI command implementations.

use std::fs;
use std::path::Path;

use elin_common::Program;
use elin_vm::{ConsoleReporter, Interpreter, Reporter};

/// Compile a .elin source file to .outz bytecode text.
pub fn compile(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: compile requires an input file");
        eprintln!("Usage: elin compile <input.elin> [-o output.outz]");
        return Err(1);
    }

    let input = &args[0];

    // Parse -o flag
    let output = if args.len() >= 3 && args[1] == "-o" {
        args[2].clone()
    } else if let Some(stem) = input.strip_suffix(".elin") {
        format!("{stem}.outz")
    } else {
        format!("{input}.outz")
    };

    let source = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{input}': {e}");
        1
    })?;

    let package = Path::new(input)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("program");

    let bytecode = elin_compiler::compile(&source, package).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    // The compiler's output is well-formed by construction; decoding it
    // back gives the instruction count for the summary line.
    let instr_count = Program::parse(&bytecode)
        .map(|p| p.instruction_count())
        .map_err(|e| {
            eprintln!("error: {e}");
            1
        })?;

    fs::write(&output, &bytecode).map_err(|e| {
        eprintln!("error: cannot write '{output}': {e}");
        1
    })?;

    eprintln!("compiled {instr_count} instructions -> {output}");
    Ok(())
}

/// Decode and execute a .outz bytecode program.
pub fn run(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: run requires an input file");
        eprintln!("Usage: elin run <input.outz> [--dump-state]");
        return Err(1);
    }

    let input = &args[0];
    let mut dump_state = false;
    for arg in &args[1..] {
        if arg == "--dump-state" {
            dump_state = true;
        } else {
            eprintln!("error: unknown option '{arg}'");
            return Err(1);
        }
    }

    let text = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{input}': {e}");
        1
    })?;

    let program = Program::parse(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let mut reporter = ConsoleReporter;
    let mut interp = Interpreter::new();

    reporter.message("=== Execution Started ===");
    interp.run(&program, &mut reporter);
    reporter.message("=== Execution Finished ===");

    if dump_state {
        interp.dump_variables(&mut reporter);
        interp.dump_stack(&mut reporter);
    }

    Ok(())
}
