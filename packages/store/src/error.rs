//! Error taxonomy for remote collection access.
//!
//! Two failure classes cover everything a [`crate::RecordStore`] can report:
//! the store could not be reached at all, or it was reached and the addressed
//! record does not exist. Neither is retried at this layer; retry policy
//! belongs to whoever owns the user interaction.

use thiserror::Error;

/// Failure reported by a [`crate::RecordStore`] operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Transport or server failure; the remote call could not complete.
    #[error("record store unavailable: {reason}")]
    Unavailable { reason: String },
    /// The store was reached but reports the identifier absent.
    #[error("record not found")]
    NotFound,
}

impl StoreError {
    /// Shorthand for [`StoreError::Unavailable`] from any displayable cause.
    pub fn unavailable(reason: impl ToString) -> Self {
        Self::Unavailable {
            reason: reason.to_string(),
        }
    }
}
