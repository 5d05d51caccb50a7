//! Error types for localefix-repair.
//!
//! Two families are distinguished:
//! - Validation blocks (exit code 2): the document or the repair output does not
//!   have the shape the repair guarantees, so nothing is written.
//! - Runtime errors (exit code 1): I/O failures and other tool errors.

use thiserror::Error;

/// The top-level error type for repair operations.
#[derive(Debug, Error)]
pub enum RepairError {
    /// A structural rejection (exit code 2). The target file is left as found.
    #[error("validation block: {message}")]
    Validation { message: String },

    /// A runtime/tool error (exit code 1): I/O, encoding, missing file.
    #[error("runtime error: {0:#}")]
    Runtime(#[from] anyhow::Error),
}

impl RepairError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RepairError::Validation { .. })
    }

    /// Returns the recommended exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            RepairError::Validation { .. } => 2,
            RepairError::Runtime(_) => 1,
        }
    }
}

/// Result type alias using RepairError.
pub type RepairResult<T> = Result<T, RepairError>;
