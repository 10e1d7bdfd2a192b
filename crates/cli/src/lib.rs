//! pinfont command-line library
//!
//! Configuration, the build pipeline and the font generator boundary,
//! shared by the `pinfont` binary and its tests.

pub mod config;
pub mod generate;
pub mod pipeline;
pub mod staging;
pub mod util;

pub use config::{ProjectConfig, CONFIG_FILE};
pub use generate::{CommandGenerator, FontGenerator, GenerationError, GenerationJob};
pub use pipeline::{Event, Pipeline, Plan, SyncReport};
