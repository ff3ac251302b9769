//! Collaborator configuration for the coordinator.

use std::fmt;
use std::sync::Arc;

use txcoord_core::{TransactionManager, UserTransaction};

/// The collaborators a coordinator delegates to.
///
/// Either may be absent. Without a user transaction, begin-or-join and
/// commit become no-ops; without a transaction manager, suspend and resume
/// fail.
#[derive(Clone, Default)]
pub struct CoordinatorConfig {
    /// Suspend/resume capability.
    pub transaction_manager: Option<Arc<dyn TransactionManager>>,
    /// Begin/commit/rollback/status capability.
    pub user_transaction: Option<Arc<dyn UserTransaction>>,
}

impl CoordinatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with no collaborators.
    pub fn unmanaged() -> Self {
        Self::default()
    }

    pub fn with_transaction_manager(mut self, manager: Arc<dyn TransactionManager>) -> Self {
        self.transaction_manager = Some(manager);
        self
    }

    pub fn with_user_transaction(mut self, user_transaction: Arc<dyn UserTransaction>) -> Self {
        self.user_transaction = Some(user_transaction);
        self
    }
}

impl fmt::Debug for CoordinatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoordinatorConfig")
            .field(
                "transaction_manager",
                &self.transaction_manager.as_ref().map(|_| "<dyn TransactionManager>"),
            )
            .field(
                "user_transaction",
                &self.user_transaction.as_ref().map(|_| "<dyn UserTransaction>"),
            )
            .finish()
    }
}
