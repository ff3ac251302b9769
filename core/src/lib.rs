//! txcoord Core Types
//!
//! This crate provides the foundational types shared by the coordinator and
//! by transaction manager implementations:
//! - Transaction status (the manager-defined state machine)
//! - Identity types (ContextId, TransactionHandle)
//! - Capability traits (UserTransaction, TransactionManager)
//! - Manager error types

mod capability;
mod error;
mod id;
mod status;

pub use capability::*;
pub use error::*;
pub use id::*;
pub use status::*;
