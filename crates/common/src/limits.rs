//! Static capacity limits for one script instance.
//!
//! Every limit is enforced with an explicit check and a structured error;
//! overflow never truncates silently.

/// Maximum number of declared variables per script.
pub const MAX_VARIABLES: usize = 100;

/// Maximum number of executable instructions per script.
pub const MAX_INSTRUCTIONS: usize = 1024;

/// Maximum value-stack depth, declared variables included.
pub const MAX_STACK_DEPTH: usize = 1024;
