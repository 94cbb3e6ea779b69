//! In-memory adapter implementations.
//!
//! Thread-safe stand-ins for browser-style local storage, suitable for tests
//! and for embedding without a filesystem.

mod storage;

pub use storage::InMemoryKeyValueStorage;
