//! StackScript CLI — run, check, and inspect `.script` files.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage or source error
//! - 2: Load error
//! - 3: Runtime error

mod commands;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "check" => commands::check(&args[2..]),
        "dump" => commands::dump(&args[2..]),
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
    eprintln!("Usage: stackscript <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <file.script>...                        Interpret scripts in order");
    eprintln!("  check <file.script>                         Load only; report table sizes");
    eprintln!("  dump <file.script> [--vars] [--instructions] [--stack]");
    eprintln!("                                              Interpret, then print diagnostics");
}
