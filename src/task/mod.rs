//! Task tracking core.
//!
//! Owns the task list, persists it through a key-value storage port, and
//! derives the filtered and summarized views an interaction layer renders.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Derived views in [`query`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod query;
pub mod services;

#[cfg(test)]
mod tests;
