//! CLI command implementations.

use std::fs;

use stackscript_vm::{Script, ScriptError};

/// Interpret one or more script files in order, stopping at the first
/// failure.
pub fn run(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: run requires at least one input file");
        eprintln!("Usage: stackscript run <file.script>...");
        return Err(1);
    }

    for path in args {
        let mut script = Script::open(path).map_err(|e| report(path, &e))?;
        script.interpret().map_err(|e| report(path, &e))?;
    }
    Ok(())
}

/// Load a script without executing it and report its table sizes.
pub fn check(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: check requires an input file");
        eprintln!("Usage: stackscript check <file.script>");
        return Err(1);
    }

    let path = &args[0];
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })?;

    let loaded = stackscript_loader::load(&text).map_err(|e| {
        eprintln!("error: {e}");
        2
    })?;

    println!(
        "OK: {path} ({} variables, {} instructions, {} lines)",
        loaded.variables.len(),
        loaded.instructions.len(),
        loaded.lines
    );
    Ok(())
}

/// Interpret a script, then print the requested diagnostic tables.
///
/// With no flags, all three tables are printed.
pub fn dump(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: dump requires an input file");
        eprintln!("Usage: stackscript dump <file.script> [--vars] [--instructions] [--stack]");
        return Err(1);
    }

    let path = &args[0];
    let mut vars = false;
    let mut instructions = false;
    let mut stack = false;
    for flag in &args[1..] {
        match flag.as_str() {
            "--vars" => vars = true,
            "--instructions" => instructions = true,
            "--stack" => stack = true,
            other => {
                eprintln!("error: unknown flag '{other}'");
                return Err(1);
            }
        }
    }
    if !(vars || instructions || stack) {
        vars = true;
        instructions = true;
        stack = true;
    }

    let mut script = Script::open(path).map_err(|e| report(path, &e))?;
    script.interpret().map_err(|e| report(path, &e))?;

    if vars {
        println!("variables:");
        for (i, token) in script.variables().iter().enumerate() {
            println!(
                "  ({i}) {} '{}' hash {:#010x} slot {} (line {})",
                token.opcode.mnemonic(),
                token.name().unwrap_or("?"),
                token.hash,
                token.slot.map_or("-".to_string(), |s| s.to_string()),
                token.line,
            );
        }
    }
    if instructions {
        println!("instructions:");
        for (i, token) in script.instructions().iter().enumerate() {
            println!(
                "  ({i}) {} {{ {} }} (line {})",
                token.opcode.mnemonic(),
                token.parameters.join(" "),
                token.line,
            );
        }
    }
    if stack {
        println!("stack:");
        for (i, value) in script.stack().iter().enumerate() {
            println!("  [{i}] {value}");
        }
    }
    Ok(())
}

/// Report an error to stderr and map it to the exit code for its class.
fn report(path: &str, err: &ScriptError) -> i32 {
    eprintln!("error: {path}: {err}");
    match err {
        ScriptError::SourceNotFound { .. } | ScriptError::Io { .. } => 1,
        ScriptError::Load(_) => 2,
        ScriptError::Exec(_) => 3,
    }
}
