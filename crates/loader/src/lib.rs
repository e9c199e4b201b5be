//! StackScript loader — splits a script source into its two tables.
//!
//! Each non-comment line becomes a [`Token`]; tokens whose opcode is a
//! variable-type kind go to the variable table, instruction kinds go to
//! the instruction list, both in file order. A head that resolves to no
//! catalog entry stops the load with [`LoadError::UnknownMnemonic`]
//! rather than being dropped, so typos surface at load time instead of
//! silently changing program behavior.
//!
//! # Usage
//!
//! ```
//! let script = stackscript_loader::load("INT x\nMOV x 5\nPRINT x\n").unwrap();
//! assert_eq!(script.variables.len(), 1);
//! assert_eq!(script.instructions.len(), 2);
//! ```

pub mod error;

pub use error::LoadError;

use stackscript_common::limits::{MAX_INSTRUCTIONS, MAX_VARIABLES};
use stackscript_common::Token;

/// A script split into its variable table and instruction list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedScript {
    /// Declaration tokens, in file order. Names are unique.
    pub variables: Vec<Token>,
    /// Executable-instruction tokens, in file order.
    pub instructions: Vec<Token>,
    /// Total number of source lines read, comments and blanks included.
    pub lines: usize,
}

/// Load a script source into its tables.
///
/// Returns the first error encountered; the partial tables are discarded.
pub fn load(text: &str) -> Result<LoadedScript, LoadError> {
    let mut script = LoadedScript::default();

    for (idx, line) in text.lines().enumerate() {
        script.lines = idx + 1;
        let Some(token) = Token::parse(line, idx + 1) else {
            continue;
        };

        if token.opcode.is_declaration() {
            if let Some(name) = token.name() {
                if let Some(first) = script.variables.iter().find(|v| v.name() == Some(name)) {
                    return Err(LoadError::DuplicateVariable {
                        line: token.line,
                        name: name.to_string(),
                        first_line: first.line,
                    });
                }
            }
            if script.variables.len() >= MAX_VARIABLES {
                return Err(LoadError::TooManyVariables {
                    line: token.line,
                    limit: MAX_VARIABLES,
                });
            }
            script.variables.push(token);
        } else if token.opcode.is_instruction() {
            if script.instructions.len() >= MAX_INSTRUCTIONS {
                return Err(LoadError::TooManyInstructions {
                    line: token.line,
                    limit: MAX_INSTRUCTIONS,
                });
            }
            script.instructions.push(token);
        } else {
            return Err(LoadError::UnknownMnemonic {
                line: token.line,
                mnemonic: token.text,
            });
        }
    }

    Ok(script)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every loaded token lands in exactly one table, and the two
        /// tables together account for every non-comment line.
        #[test]
        fn partition_is_exhaustive(
            decls in prop::collection::vec("[a-z]{1,6}", 0..8),
            pushes in 0usize..8
        ) {
            // Unique names to stay clear of the duplicate check.
            let mut source = String::new();
            let mut seen = std::collections::HashSet::new();
            let mut unique = 0;
            for name in &decls {
                if seen.insert(name.clone()) {
                    source.push_str(&format!("INT {name}\n"));
                    unique += 1;
                }
            }
            for i in 0..pushes {
                source.push_str(&format!("PUSH {i}\n"));
            }

            let script = load(&source).unwrap();
            prop_assert_eq!(script.variables.len(), unique);
            prop_assert_eq!(script.instructions.len(), pushes);
            prop_assert!(script.variables.iter().all(|t| t.opcode.is_declaration()));
            prop_assert!(script.instructions.iter().all(|t| t.opcode.is_instruction()));
        }
    }
}
