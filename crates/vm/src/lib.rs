//! StackScript execution engine.
//!
//! A [`Script`] owns one interpretation's worth of state: the source
//! text, the value stack, and the variable/instruction tables. Execution
//! is two-phase: declared variables are allocated on the stack first,
//! then the instruction list runs in file order, each opcode validating
//! its own arity and operands before mutating state.
//!
//! # Usage
//!
//! ```
//! use stackscript_vm::Script;
//!
//! let mut script = Script::from_source("demo.script", "INT x\nMOV x 5\nPRINT x\n");
//! let mut out = Vec::new();
//! script.interpret_to(&mut out).unwrap();
//! assert_eq!(out, b"5");
//! ```

pub mod error;
pub mod execute;
pub mod script;

pub use error::{ExecError, ScriptError};
pub use script::Script;
