//! Workflow integration tests
//!
//! Tests for complete workflows that exercise multiple commands
//! and validate end-to-end behavior.

pub mod build;
pub mod edge_cases;
pub mod sync_check;
