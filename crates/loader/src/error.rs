//! Error types for script loading.

use thiserror::Error;

/// Errors produced while loading a script into its tables.
///
/// Loading stops at the first error; the script never reaches execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The head of a line resolved to no catalog entry.
    #[error("line {line}: unknown mnemonic '{mnemonic}'")]
    UnknownMnemonic { line: usize, mnemonic: String },

    /// A variable name was declared more than once.
    #[error("line {line}: variable '{name}' already declared on line {first_line}")]
    DuplicateVariable {
        line: usize,
        name: String,
        first_line: usize,
    },

    /// More declarations than the variable table holds.
    #[error("line {line}: too many variables (limit {limit})")]
    TooManyVariables { line: usize, limit: usize },

    /// More executable instructions than the instruction list holds.
    #[error("line {line}: too many instructions (limit {limit})")]
    TooManyInstructions { line: usize, limit: usize },
}
