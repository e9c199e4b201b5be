//! StackScript common types.
//!
//! This crate provides the foundational pieces shared by the loader and
//! the execution engine:
//!
//! - [`joaat`] — the one-at-a-time mnemonic hash
//! - [`Opcode`] — the symbolic opcode catalog with hash resolution
//! - [`Token`] — the parsed representation of one script line
//! - [`limits`] — static capacity limits for a script instance
//!
//! It has no runtime dependencies.

pub mod hash;
pub mod limits;
pub mod opcode;
pub mod token;

// Re-export commonly used items at the crate root.
pub use hash::joaat;
pub use opcode::Opcode;
pub use token::{is_identifier, is_integer_literal, Token};
