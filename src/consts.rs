//! Global constants for the command-line front end.

pub const DEFAULT_LOG_FILTER: &str = "warn"; // Filter used when RUST_LOG is unset.
pub const STDIN_PATH: &str = "-"; // Input path meaning "read from standard input".

pub const EXIT_VALID: u8 = 0; // The payload passed validation.
pub const EXIT_INVALID: u8 = 1; // The payload was rejected.
pub const EXIT_FAILURE: u8 = 2; // The payload could not be read or parsed.
