//! Capabilities an external transaction manager exposes.
//!
//! Both traits take the calling [`ContextId`] explicitly instead of reading
//! ambient thread-local state. Implementations must be shareable across
//! threads since one coordinator serves every context.

use crate::{ContextId, ManagerResult, TransactionHandle, TransactionStatus};

/// Context-bound begin/commit/rollback of the caller's transaction.
pub trait UserTransaction: Send + Sync {
    /// Start a transaction and bind it to `cx`.
    fn begin(&self, cx: ContextId) -> ManagerResult<()>;

    /// Commit the transaction bound to `cx`.
    fn commit(&self, cx: ContextId) -> ManagerResult<()>;

    /// Roll back the transaction bound to `cx`.
    fn rollback(&self, cx: ContextId) -> ManagerResult<()>;

    /// Status of the transaction bound to `cx`.
    fn status(&self, cx: ContextId) -> ManagerResult<TransactionStatus>;
}

/// Moves transactions between execution contexts.
pub trait TransactionManager: Send + Sync {
    /// Detach the transaction bound to `cx` and return its handle.
    fn suspend(&self, cx: ContextId) -> ManagerResult<TransactionHandle>;

    /// Bind the suspended transaction to `cx`.
    fn resume(&self, cx: ContextId, handle: TransactionHandle) -> ManagerResult<()>;
}
