//! Application services for task tracking.

mod config;
mod detail;
mod store;

pub use config::{DEFAULT_STORAGE_KEY, StoreConfig};
pub use detail::{DetailOutcome, DetailView, TaskDetailSession};
pub use store::{TaskSnapshot, TaskStore, TaskStoreError, TaskStoreResult};
