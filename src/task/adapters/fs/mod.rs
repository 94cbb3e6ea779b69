//! Filesystem-backed adapter implementations.

mod storage;

pub use storage::FileKeyValueStorage;
