pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use crate::core::pipeline::MatchingPipeline;
pub use crate::core::runner::{MatchRunner, RunOutcome};
pub use domain::model::{MatchReport, OutputFormat, Pairing, PreferenceInput};
pub use utils::error::{MatchError, Result};
