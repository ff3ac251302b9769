//! txcoord Transaction
//!
//! Transaction lifecycle coordination over an external transaction manager.
//!
//! Responsibilities:
//! - Begin a transaction or join the one bound to the caller's context
//! - Report ownership, so only the frame that began a transaction commits it
//! - Commit only from commit-eligible statuses
//! - Roll back best-effort, logging instead of failing
//! - Suspend and resume transactions across execution contexts

mod config;
mod coordinator;
mod error;
mod scope;

pub use config::CoordinatorConfig;
pub use coordinator::TransactionCoordinator;
pub use error::{CoordinatorError, CoordinatorResult};
