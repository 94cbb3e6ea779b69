//! Unit tests for the task module.
//!
//! Tests are organised by concept: catalog and record rules, the persisted
//! format, derived views, the store, and the detail dialog.

mod detail_tests;
