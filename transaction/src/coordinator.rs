//! Transaction coordinator: decides whether callers begin or join, and
//! mediates commit, rollback, suspend and resume against the manager.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace, warn};
use txcoord_core::{
    ContextId, ManagerError, ManagerResult, TransactionHandle, TransactionManager,
    TransactionStatus, UserTransaction,
};

use crate::config::CoordinatorConfig;
use crate::error::{CoordinatorError, CoordinatorResult};

/// Coordinates the transaction lifecycle on behalf of application code.
///
/// Build one at startup and share it by reference. Every operation runs
/// synchronously on the caller's thread; the coordinator holds no locks and
/// never retries. All status decisions are made against what the user
/// transaction reports for the given context at call time.
pub struct TransactionCoordinator {
    transaction_manager: Option<Arc<dyn TransactionManager>>,
    user_transaction: Option<Arc<dyn UserTransaction>>,
}

impl TransactionCoordinator {
    /// Create a coordinator over the configured collaborators.
    pub fn new(config: CoordinatorConfig) -> Self {
        Self {
            transaction_manager: config.transaction_manager,
            user_transaction: config.user_transaction,
        }
    }

    /// Create a coordinator with no collaborators (no-op transactions).
    pub fn unmanaged() -> Self {
        Self::new(CoordinatorConfig::unmanaged())
    }

    /// Replace the collaborators. The last configuration applied wins.
    pub fn configure(&mut self, config: CoordinatorConfig) {
        self.transaction_manager = config.transaction_manager;
        self.user_transaction = config.user_transaction;
    }

    /// Check if a transaction manager is configured.
    pub fn has_transaction_manager(&self) -> bool {
        self.transaction_manager.is_some()
    }

    /// Check if a user transaction is configured.
    pub fn has_user_transaction(&self) -> bool {
        self.user_transaction.is_some()
    }

    // ========== Transaction Lifecycle ==========

    /// Status of the transaction bound to `cx`.
    ///
    /// Reports `NoTransaction` when no user transaction is configured.
    pub fn status(&self, cx: ContextId) -> CoordinatorResult<TransactionStatus> {
        match &self.user_transaction {
            Some(ut) => ut.status(cx).map_err(CoordinatorError::status_query),
            None => Ok(TransactionStatus::NoTransaction),
        }
    }

    /// Start a transaction on `cx`, or join the one already bound.
    ///
    /// Returns true if a new transaction was started, meaning the caller
    /// owns it and must eventually commit or roll back. Returns false if
    /// the caller joined an existing transaction and must not commit.
    /// Without a user transaction the caller owns a no-op transaction.
    pub fn begin_or_join(&self, cx: ContextId) -> CoordinatorResult<bool> {
        let Some(ut) = &self.user_transaction else {
            return Ok(true);
        };

        let status = ut.status(cx).map_err(CoordinatorError::status_query)?;
        if status != TransactionStatus::NoTransaction {
            debug!(context = %cx, %status, "joined existing transaction");
            return Ok(false);
        }

        ut.begin(cx).map_err(CoordinatorError::begin)?;
        debug!(context = %cx, "began new transaction");
        Ok(true)
    }

    /// Commit the transaction bound to `cx`.
    ///
    /// The commit is only attempted when the status is commit-eligible
    /// (active, preparing, prepared, committing); any other status is
    /// skipped without error.
    pub fn commit(&self, cx: ContextId) -> CoordinatorResult<()> {
        let Some(ut) = &self.user_transaction else {
            return Ok(());
        };

        let status = ut.status(cx).map_err(CoordinatorError::status_query)?;
        if !status.is_commit_eligible() {
            trace!(context = %cx, %status, "commit skipped");
            return Ok(());
        }

        ut.commit(cx).map_err(CoordinatorError::commit)?;
        debug!(context = %cx, "committed transaction");
        Ok(())
    }

    /// Roll back the transaction bound to `cx`.
    ///
    /// Only an active transaction is rolled back. This never fails: it is
    /// called on failure paths, and a second error here must not replace
    /// the one that triggered the rollback. Problems are logged instead.
    pub fn rollback(&self, cx: ContextId) {
        let Some(ut) = &self.user_transaction else {
            warn!(context = %cx, "rollback requested but no user transaction is configured");
            return;
        };

        match ut.status(cx) {
            Ok(TransactionStatus::Active) => match ut.rollback(cx) {
                Ok(()) => debug!(context = %cx, "rolled back transaction"),
                Err(error) => warn!(context = %cx, %error, "transaction rollback failed"),
            },
            Ok(status) => {
                warn!(context = %cx, %status, "rollback requested but no active transaction")
            }
            Err(error) => warn!(context = %cx, %error, "transaction rollback failed"),
        }
    }

    // ========== Suspend / Resume ==========

    /// Detach the transaction bound to `cx` and hand it to the caller.
    pub fn suspend(&self, cx: ContextId) -> CoordinatorResult<TransactionHandle> {
        let handle = self
            .manager()
            .and_then(|tm| tm.suspend(cx))
            .map_err(CoordinatorError::suspend)?;
        debug!(context = %cx, %handle, "suspended transaction");
        Ok(handle)
    }

    /// Bind a suspended transaction to `cx`.
    ///
    /// Fails if the handle was already resumed or its transaction has
    /// already completed.
    pub fn resume(&self, cx: ContextId, handle: TransactionHandle) -> CoordinatorResult<()> {
        let raw = handle.raw();
        self.manager()
            .and_then(|tm| tm.resume(cx, handle))
            .map_err(CoordinatorError::resume)?;
        debug!(context = %cx, handle = raw, "resumed transaction");
        Ok(())
    }

    // ========== Internal Helpers ==========

    /// Finish a transaction owned by a scoped helper.
    ///
    /// Commits when the status is commit-eligible. A transaction on the
    /// rollback path cannot commit: a marked one is rolled back to release
    /// `cx`, and the caller gets `RollbackOnly` instead of success.
    pub(crate) fn settle(&self, cx: ContextId) -> CoordinatorResult<()> {
        let Some(ut) = &self.user_transaction else {
            return Ok(());
        };

        let status = ut.status(cx).map_err(CoordinatorError::status_query)?;
        if status.is_commit_eligible() {
            ut.commit(cx).map_err(CoordinatorError::commit)?;
            debug!(context = %cx, "committed transaction");
            return Ok(());
        }
        if !status.is_rollback_path() {
            trace!(context = %cx, %status, "commit skipped");
            return Ok(());
        }

        if status == TransactionStatus::MarkedRollback {
            match ut.rollback(cx) {
                Ok(()) => debug!(context = %cx, "rolled back rollback-only transaction"),
                Err(error) => warn!(context = %cx, %error, "transaction rollback failed"),
            }
        }
        Err(CoordinatorError::rollback_only(status))
    }

    fn manager(&self) -> ManagerResult<&dyn TransactionManager> {
        self.transaction_manager
            .as_deref()
            .ok_or_else(|| ManagerError::not_configured("transaction manager"))
    }
}

impl Default for TransactionCoordinator {
    fn default() -> Self {
        Self::unmanaged()
    }
}

impl From<CoordinatorConfig> for TransactionCoordinator {
    fn from(config: CoordinatorConfig) -> Self {
        Self::new(config)
    }
}

impl fmt::Debug for TransactionCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionCoordinator")
            .field("has_transaction_manager", &self.has_transaction_manager())
            .field("has_user_transaction", &self.has_user_transaction())
            .finish()
    }
}
