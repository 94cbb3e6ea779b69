//! Progress tracker: task store and derived-view model.
//!
//! Users keep a list of tasks, each with a title, a free-text note, and one
//! of five fixed statuses. This crate provides the state behind such a
//! tracker; rendering and input handling live outside it.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: the status catalog and task record, with no infrastructure
//!   dependencies
//! - **Ports**: abstract traits for key-value storage and user confirmation
//! - **Adapters**: in-memory and file-backed storage, fixed-answer
//!   confirmation
//! - **Services**: the task store and the detail/edit dialog session
//!
//! # Modules
//!
//! - [`task`]: task storage, filtering, and progress summaries

pub mod task;
