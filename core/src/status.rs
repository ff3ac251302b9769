//! Transaction status as reported by a transaction manager.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of the transaction bound to an execution context.
///
/// Values are produced by the manager; the coordinator only branches on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// A transaction is bound and can do work.
    Active,
    /// The transaction can only be rolled back.
    MarkedRollback,
    /// All resources voted yes in phase one.
    Prepared,
    /// The transaction committed.
    Committed,
    /// The transaction rolled back.
    RolledBack,
    /// The manager cannot determine the outcome.
    Unknown,
    /// No transaction is bound to the context.
    NoTransaction,
    /// Phase one is in progress.
    Preparing,
    /// Phase two commit is in progress.
    Committing,
    /// Rollback is in progress.
    RollingBack,
}

impl TransactionStatus {
    /// Every status, in numeric code order.
    pub const ALL: [TransactionStatus; 10] = [
        TransactionStatus::Active,
        TransactionStatus::MarkedRollback,
        TransactionStatus::Prepared,
        TransactionStatus::Committed,
        TransactionStatus::RolledBack,
        TransactionStatus::Unknown,
        TransactionStatus::NoTransaction,
        TransactionStatus::Preparing,
        TransactionStatus::Committing,
        TransactionStatus::RollingBack,
    ];

    /// Numeric code used by the classic distributed-transaction API.
    pub fn code(&self) -> i32 {
        match self {
            TransactionStatus::Active => 0,
            TransactionStatus::MarkedRollback => 1,
            TransactionStatus::Prepared => 2,
            TransactionStatus::Committed => 3,
            TransactionStatus::RolledBack => 4,
            TransactionStatus::Unknown => 5,
            TransactionStatus::NoTransaction => 6,
            TransactionStatus::Preparing => 7,
            TransactionStatus::Committing => 8,
            TransactionStatus::RollingBack => 9,
        }
    }

    /// Status for a numeric code, if the code is known.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }

    /// Returns true if a commit attempt from this status is meaningful.
    ///
    /// The eligible set is exactly Active, Preparing, Prepared and Committing.
    pub fn is_commit_eligible(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Active
                | TransactionStatus::Preparing
                | TransactionStatus::Prepared
                | TransactionStatus::Committing
        )
    }

    /// Returns true if the transaction has a final outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransactionStatus::Committed | TransactionStatus::RolledBack)
    }

    /// Returns true if the transaction is headed for (or reached) rollback.
    pub fn is_rollback_path(&self) -> bool {
        matches!(
            self,
            TransactionStatus::MarkedRollback
                | TransactionStatus::RollingBack
                | TransactionStatus::RolledBack
        )
    }

    /// Returns true if a transaction is bound to the context.
    pub fn has_transaction(&self) -> bool {
        *self != TransactionStatus::NoTransaction
    }

    /// Snake-case name of the status.
    pub fn name(&self) -> &'static str {
        match self {
            TransactionStatus::Active => "active",
            TransactionStatus::MarkedRollback => "marked_rollback",
            TransactionStatus::Prepared => "prepared",
            TransactionStatus::Committed => "committed",
            TransactionStatus::RolledBack => "rolled_back",
            TransactionStatus::Unknown => "unknown",
            TransactionStatus::NoTransaction => "no_transaction",
            TransactionStatus::Preparing => "preparing",
            TransactionStatus::Committing => "committing",
            TransactionStatus::RollingBack => "rolling_back",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
