//! Process exit codes

/// Command completed
pub const EXIT_SUCCESS: i32 = 0;
/// Command completed but some input was skipped
pub const EXIT_WARNING: i32 = 1;
/// Command failed
pub const EXIT_ERROR: i32 = 2;
