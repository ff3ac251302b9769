//! Scoped transactions built on the coordinator primitives.

use tracing::warn;
use txcoord_core::{ContextId, TransactionHandle};

use crate::coordinator::TransactionCoordinator;
use crate::error::{CoordinatorError, CoordinatorResult};

impl TransactionCoordinator {
    /// Run `work` inside a transaction on `cx`.
    ///
    /// Begins a transaction or joins the one already bound. When this call
    /// owns the transaction it commits after `work` succeeds and rolls back
    /// after it fails (or after the commit fails). If `work` succeeds but
    /// the transaction was marked for rollback, the owner releases it and
    /// returns `RollbackOnly`. A joined call does neither, leaving the
    /// outcome to the owner further up the chain.
    pub fn in_transaction<T, E, F>(&self, cx: ContextId, work: F) -> Result<T, E>
    where
        F: FnOnce(ContextId) -> Result<T, E>,
        E: From<CoordinatorError>,
    {
        let owns = self.begin_or_join(cx)?;

        match work(cx) {
            Ok(value) => {
                if owns {
                    if let Err(err) = self.settle(cx) {
                        if !err.is_rollback_only() {
                            self.rollback(cx);
                        }
                        return Err(err.into());
                    }
                }
                Ok(value)
            }
            Err(err) => {
                if owns {
                    self.rollback(cx);
                }
                Err(err)
            }
        }
    }

    /// Run `work` on `cx` with its transaction suspended.
    ///
    /// If a transaction manager is configured and a transaction is bound, it
    /// is suspended for the duration of `work` and resumed afterwards,
    /// whatever the outcome. An error from `work` takes precedence over a
    /// resume failure, which is then only logged.
    pub fn suspended<T, E, F>(&self, cx: ContextId, work: F) -> Result<T, E>
    where
        F: FnOnce(ContextId) -> Result<T, E>,
        E: From<CoordinatorError>,
    {
        let handle = self.suspend_if_bound(cx)?;

        let result = work(cx);

        let Some(handle) = handle else {
            return result;
        };

        match (result, self.resume(cx, handle)) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(resume_err)) => Err(resume_err.into()),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(resume_err)) => {
                match resume_err.source_error() {
                    Some(error) => {
                        warn!(context = %cx, %error, "resume failed after suspended work failed")
                    }
                    None => {
                        warn!(context = %cx, error = %resume_err, "resume failed after suspended work failed")
                    }
                }
                Err(err)
            }
        }
    }

    /// Suspend whatever transaction is bound to `cx`, if any.
    ///
    /// With a user transaction the status decides. Without one the manager
    /// is asked directly, and its `NoTransaction` answer means there is
    /// nothing to suspend.
    fn suspend_if_bound(&self, cx: ContextId) -> CoordinatorResult<Option<TransactionHandle>> {
        if !self.has_transaction_manager() {
            return Ok(None);
        }
        if self.has_user_transaction() && !self.status(cx)?.has_transaction() {
            return Ok(None);
        }

        match self.suspend(cx) {
            Ok(handle) => Ok(Some(handle)),
            Err(err) if !self.has_user_transaction() && err.is_no_transaction() => Ok(None),
            Err(err) => Err(err),
        }
    }
}
