//! Adapter implementations for task tracking ports.

pub mod fs;
pub mod memory;

mod confirmation;

pub use confirmation::StaticConfirmation;
