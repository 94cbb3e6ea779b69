//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod confirmation;
pub mod storage;

pub use confirmation::{ConfirmationGate, ConfirmationRequest, Decision};
pub use storage::{KeyValueStorage, StorageError, StorageResult};

