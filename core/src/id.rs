//! Identity types for execution contexts and suspended transactions.

use std::fmt;

/// Identifier of the execution context (thread, task, request) a
/// transaction is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextId(pub u64);

impl ContextId {
    /// Create a new ContextId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cx{}", self.0)
    }
}

impl From<u64> for ContextId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Opaque token for a suspended transaction.
///
/// Issued by a transaction manager on suspend and consumed by resume.
/// The handle is deliberately not `Clone`: moving it into `resume` is the
/// only way to spend it.
#[derive(Debug, PartialEq, Eq, Hash)]
#[must_use = "a suspended transaction is lost unless its handle is resumed"]
pub struct TransactionHandle(u64);

impl TransactionHandle {
    /// Rebuild a handle from the raw value a manager issued.
    ///
    /// Managers must reject raw values that were already resumed.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransactionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tx{}", self.0)
    }
}
