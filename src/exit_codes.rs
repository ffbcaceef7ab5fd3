//! Exit code constants for the trigger-workflow CLI.
//!
//! - 0: Dispatch accepted (HTTP 204)
//! - 1: Any failure (missing token, rejected or unexpected response, transport fault)

/// The workflow dispatch was accepted.
pub const SUCCESS: i32 = 0;

/// Anything else.
pub const FAILURE: i32 = 1;
