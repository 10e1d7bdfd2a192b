//! Integration tests for pinfont
//!
//! End-to-end runs of the `pinfont` binary against throwaway icon
//! projects.

// Test modules
mod common;
mod workflows;
