//! Coordinator error types.

use thiserror::Error;
use txcoord_core::{ManagerError, TransactionStatus};

/// Coordinator errors.
///
/// Every variant names the operation that failed. All but `RollbackOnly`
/// carry the manager's error as their source. Rollback failures never
/// appear here.
#[derive(Debug, Error)]
pub enum CoordinatorError {
    /// The transaction status could not be read.
    #[error("unable to query transaction status")]
    StatusQuery {
        #[source]
        source: ManagerError,
    },

    /// A new transaction could not be started.
    #[error("unable to start transaction")]
    Begin {
        #[source]
        source: ManagerError,
    },

    /// The owned transaction failed to commit.
    #[error("transaction commit failed")]
    Commit {
        #[source]
        source: ManagerError,
    },

    /// The current transaction could not be suspended.
    #[error("unable to suspend current transaction")]
    Suspend {
        #[source]
        source: ManagerError,
    },

    /// The suspended transaction could not be resumed.
    #[error("unable to resume transaction")]
    Resume {
        #[source]
        source: ManagerError,
    },

    /// The owned transaction was marked for rollback and could not commit.
    #[error("transaction cannot commit: status is {status}")]
    RollbackOnly { status: TransactionStatus },
}

impl CoordinatorError {
    pub fn status_query(source: ManagerError) -> Self {
        Self::StatusQuery { source }
    }

    pub fn begin(source: ManagerError) -> Self {
        Self::Begin { source }
    }

    pub fn commit(source: ManagerError) -> Self {
        Self::Commit { source }
    }

    pub fn suspend(source: ManagerError) -> Self {
        Self::Suspend { source }
    }

    pub fn resume(source: ManagerError) -> Self {
        Self::Resume { source }
    }

    pub fn rollback_only(status: TransactionStatus) -> Self {
        Self::RollbackOnly { status }
    }

    /// The manager error that caused this failure, if any.
    pub fn source_error(&self) -> Option<&ManagerError> {
        match self {
            Self::StatusQuery { source }
            | Self::Begin { source }
            | Self::Commit { source }
            | Self::Suspend { source }
            | Self::Resume { source } => Some(source),
            Self::RollbackOnly { .. } => None,
        }
    }

    pub fn is_status_query(&self) -> bool {
        matches!(self, Self::StatusQuery { .. })
    }

    pub fn is_begin(&self) -> bool {
        matches!(self, Self::Begin { .. })
    }

    pub fn is_commit(&self) -> bool {
        matches!(self, Self::Commit { .. })
    }

    pub fn is_suspend(&self) -> bool {
        matches!(self, Self::Suspend { .. })
    }

    pub fn is_resume(&self) -> bool {
        matches!(self, Self::Resume { .. })
    }

    pub fn is_rollback_only(&self) -> bool {
        matches!(self, Self::RollbackOnly { .. })
    }

    /// Check if the manager reported that no transaction was bound.
    pub fn is_no_transaction(&self) -> bool {
        self.source_error() == Some(&ManagerError::NoTransaction)
    }
}

/// Result type for coordinator operations.
pub type CoordinatorResult<T> = Result<T, CoordinatorError>;
