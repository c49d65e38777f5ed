//! Constants for ring configuration and the command-line caller.

/// Smallest modulus a modular ring accepts.
pub const MIN_MODULUS: u64 = 2;

/// Default term index for the command-line caller.
///
/// a(300) of the Fibonacci recurrence is the classic demonstration value.
pub const DEFAULT_INDEX: u64 = 300;

/// Upper bound on the number of terms the naive sequence listing prints.
pub const MAX_SEQUENCE_TERMS: u64 = 10_000;

/// Process exit codes for the command-line caller.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Malformed recurrence definition or modulus.
    pub const ERROR_SPECIFICATION: i32 = 4;
    /// Requested term index out of range.
    pub const ERROR_INDEX: i32 = 5;
}
