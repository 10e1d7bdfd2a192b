//! pinfont core - codepoint allocation for icon fonts
//!
//! This crate provides:
//! - The `Codepoint` newtype and its persisted hex form
//! - `CodepointRecord`, the identifier -> codepoint mapping
//! - `CodepointMaintainer`, the prune/allocate pass that keeps a record
//!   consistent with the icons currently on disk
//! - `CodepointResolver`, the lookup handed to the font generator

pub mod codepoint;
pub mod error;
pub mod maintain;
pub mod record;
pub mod resolve;

// Re-export main types for convenience
pub use codepoint::{Codepoint, DEFAULT_BASE, PRIVATE_USE_END, PRIVATE_USE_START};
pub use error::Error;
pub use maintain::{ChangeSet, CodepointMaintainer, Maintained, Reassignment};
pub use record::CodepointRecord;
pub use resolve::CodepointResolver;

/// Common result type used throughout pinfont-core
pub type Result<T> = std::result::Result<T, Error>;
