//! Errors raised while executing a script.
//!
//! Every execution error carries the opcode mnemonic, the reason, and the
//! 1-based source line, so a failure can be reported without re-parsing
//! the script.

use stackscript_loader::LoadError;
use thiserror::Error;

/// Errors that occur during the two execution phases.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// A declaration violated its arity or operand shape.
    #[error("line {line}: {mnemonic} {reason}")]
    MalformedDeclaration {
        mnemonic: &'static str,
        reason: &'static str,
        line: usize,
    },

    /// An instruction violated its arity, operand shape, or stack-depth
    /// requirement.
    #[error("line {line}: {mnemonic} {reason}")]
    MalformedInstruction {
        mnemonic: &'static str,
        reason: &'static str,
        line: usize,
    },

    /// A referenced identifier has no matching declaration.
    #[error("line {line}: {mnemonic} references undeclared variable '{name}'")]
    VariableNotFound {
        mnemonic: &'static str,
        name: String,
        line: usize,
    },

    /// A backtick string literal without its closing backtick.
    #[error("line {line}: PRINT string literal is missing its closing backtick")]
    MalformedStringLiteral { line: usize },

    /// The value stack hit its capacity limit.
    #[error("line {line}: {mnemonic} exceeded the stack capacity of {limit} slots")]
    StackExceeded {
        mnemonic: &'static str,
        limit: usize,
        line: usize,
    },
}

/// Top-level failure of one script instance.
///
/// Failures are contained to the instance that raised them; nothing is
/// retried and no state leaks across instances.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The script source was missing at construction time.
    #[error("script source not found: {path}")]
    SourceNotFound { path: String },

    /// The source could not be read, or PRINT output could not be written.
    #[error("i/o error: {message}")]
    Io { message: String },

    /// Loading failed before execution started.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Execution halted at a validation failure.
    #[error(transparent)]
    Exec(#[from] ExecError),
}
