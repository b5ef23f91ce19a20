//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Any failure: bad arguments, unreadable dataset, invalid configuration
pub const FAILURE: i32 = 1;
