//! Error handling and exit codes.

use linrec_core::constants::exit_codes;
use linrec_core::LinRecError;

/// Map a recurrence error to the process exit code.
pub fn handle_error(err: &LinRecError) -> i32 {
    match err {
        LinRecError::InvalidSpecification(_) => exit_codes::ERROR_SPECIFICATION,
        LinRecError::InvalidIndex(_) => exit_codes::ERROR_INDEX,
        LinRecError::DimensionMismatch(_)
        | LinRecError::NonSquareMatrix { .. }
        | LinRecError::InvalidExponent(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for the outcome of a whole run.
pub fn exit_status(result: &anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => exit_code(err),
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<LinRecError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
