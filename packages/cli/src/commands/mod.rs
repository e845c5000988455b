// ABOUTME: devtoken subcommands and the process exit codes they return
// ABOUTME: Commands write to an injected writer so callers can capture output

pub mod tokens;

/// Process exit code for success
pub const EXIT_SUCCESS: i32 = 0;
/// Token not verified, or record not found
pub const EXIT_FAILURE: i32 = 1;
/// Presented token is not valid Base58
pub const EXIT_MALFORMED_TOKEN: i32 = 2;
