//! Errors reported by transaction managers.

use crate::TransactionStatus;
use thiserror::Error;

/// Failures a transaction manager or user transaction can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManagerError {
    /// The capability needed for the call was never configured.
    #[error("{capability} is not configured")]
    NotConfigured { capability: &'static str },

    /// No transaction is bound to the calling context.
    #[error("no transaction is bound to the context")]
    NoTransaction,

    /// Nested transactions are not supported.
    #[error("nested transactions are not supported")]
    NotSupported,

    /// The call is not valid for the transaction's current status.
    #[error("illegal state: {message}")]
    IllegalState { message: String },

    /// The handle was never issued or was already resumed.
    #[error("invalid transaction handle: tx{raw}")]
    InvalidHandle { raw: u64 },

    /// A commit request ended in rollback.
    #[error("transaction rolled back instead of committing")]
    RolledBack,

    /// Resources reached a mixed outcome.
    #[error("heuristic outcome: {message}")]
    Heuristic { message: String },

    /// Manager-level failure (I/O, timeout, lost connection).
    #[error("system error: {0}")]
    System(String),
}

impl ManagerError {
    pub fn not_configured(capability: &'static str) -> Self {
        Self::NotConfigured { capability }
    }

    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState {
            message: message.into(),
        }
    }

    /// Illegal-state error naming the status the call was rejected in.
    pub fn unexpected_status(operation: &str, status: TransactionStatus) -> Self {
        Self::illegal_state(format!("cannot {} a transaction in status {}", operation, status))
    }

    pub fn invalid_handle(raw: u64) -> Self {
        Self::InvalidHandle { raw }
    }

    pub fn heuristic(message: impl Into<String>) -> Self {
        Self::Heuristic {
            message: message.into(),
        }
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self::System(message.into())
    }
}

/// Result type for manager operations.
pub type ManagerResult<T> = Result<T, ManagerError>;
