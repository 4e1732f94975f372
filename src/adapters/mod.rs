// Adapters layer: text formats and the local filesystem. The core never
// touches either directly.

pub mod storage;
pub mod text_input;
pub mod text_output;

pub use crate::domain::model::OutputFormat;
pub use storage::LocalStorage;
pub use text_input::parse_preferences;
pub use text_output::{build_report, render};
