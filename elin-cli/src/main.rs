//! ELIN CLI — compile and run ELIN programs.
//!
//! Exit codes:
//! - 0: Success (runtime faults are reported, not propagated)
//! - 1: Input/decode/compile error

mod commands;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "compile" => commands::compile(&args[2..]),
        "run" => commands::run(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: elin <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  compile <input.elin> [-o output.outz]   Compile source to bytecode text");
    eprintln!("  run <input.outz> [--dump-state]         Execute a bytecode program");
}
