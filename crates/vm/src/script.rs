//! Script instance state: source, value stack, and the two loaded tables.

use std::fs;
use std::path::Path;

use stackscript_common::limits::MAX_STACK_DEPTH;
use stackscript_common::Token;
use stackscript_loader::LoadedScript;

use crate::error::{ExecError, ScriptError};

/// One script instance: its source, its value stack, and the variable and
/// instruction tables produced by the last interpretation.
///
/// A `Script` owns all of its state exclusively; instances are fully
/// independent and nothing persists across them.
#[derive(Debug)]
pub struct Script {
    name: String,
    source: String,
    valid: bool,
    pub(crate) variables: Vec<Token>,
    pub(crate) instructions: Vec<Token>,
    pub(crate) stack: Vec<i32>,
}

impl Script {
    /// Open a script file.
    ///
    /// A missing file is a construction-time failure: no instance is
    /// created and nothing will be interpreted.
    pub fn open(path: impl AsRef<Path>) -> Result<Script, ScriptError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScriptError::SourceNotFound {
                path: path.display().to_string(),
            });
        }
        let source = fs::read_to_string(path).map_err(|e| ScriptError::Io {
            message: format!("cannot read '{}': {e}", path.display()),
        })?;
        Ok(Script::from_source(path.display().to_string(), source))
    }

    /// Build a script from an in-memory source.
    pub fn from_source(name: impl Into<String>, source: impl Into<String>) -> Script {
        Script {
            name: name.into(),
            source: source.into(),
            valid: true,
            variables: Vec::new(),
            instructions: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// The script name (the path it was opened from).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// False once any interpretation of this instance has failed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The current value stack, base first.
    pub fn stack(&self) -> &[i32] {
        &self.stack
    }

    /// The variable table from the last interpretation, in file order.
    pub fn variables(&self) -> &[Token] {
        &self.variables
    }

    /// The instruction list from the last interpretation, in file order.
    pub fn instructions(&self) -> &[Token] {
        &self.instructions
    }

    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn mark_invalid(&mut self) {
        self.valid = false;
    }

    /// Discard all state from a previous interpretation.
    pub(crate) fn reset(&mut self) {
        self.variables.clear();
        self.instructions.clear();
        self.stack.clear();
    }

    pub(crate) fn install(&mut self, loaded: LoadedScript) {
        self.variables = loaded.variables;
        self.instructions = loaded.instructions;
    }

    /// Push a value, checking the stack capacity limit.
    pub(crate) fn push(
        &mut self,
        value: i32,
        mnemonic: &'static str,
        line: usize,
    ) -> Result<(), ExecError> {
        if self.stack.len() >= MAX_STACK_DEPTH {
            return Err(ExecError::StackExceeded {
                mnemonic,
                limit: MAX_STACK_DEPTH,
                line,
            });
        }
        self.stack.push(value);
        Ok(())
    }

    /// Find the stack slot of a declared variable by name.
    ///
    /// Linear scan of the variable table; first declaration wins.
    pub(crate) fn find_slot(&self, name: &str) -> Option<usize> {
        self.variables
            .iter()
            .find(|v| v.name() == Some(name))
            .and_then(|v| v.slot)
    }

    /// Read a variable's slot. A slot popped off the stack is an error.
    pub(crate) fn read_slot(
        &self,
        slot: usize,
        mnemonic: &'static str,
        line: usize,
    ) -> Result<i32, ExecError> {
        self.stack
            .get(slot)
            .copied()
            .ok_or(ExecError::MalformedInstruction {
                mnemonic,
                reason: "references a variable whose stack slot has been popped",
                line,
            })
    }

    /// Overwrite a variable's slot. A slot popped off the stack is an error.
    pub(crate) fn write_slot(
        &mut self,
        slot: usize,
        value: i32,
        mnemonic: &'static str,
        line: usize,
    ) -> Result<(), ExecError> {
        match self.stack.get_mut(slot) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(ExecError::MalformedInstruction {
                mnemonic,
                reason: "references a variable whose stack slot has been popped",
                line,
            }),
        }
    }
}
